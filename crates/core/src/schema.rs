//! Schema definition
//!
//! A [`Schema`] is an ordered list of uniquely named fields, each with a
//! [`PrimitiveType`]. Declaration order is significant: it is the order in
//! which fields appear in decoded records and, under the default packing,
//! the physical order of the fields inside a record.
//!
//! Schemas are immutable once built. They can be assembled in code:
//!
//! ```
//! use structarray_core::{PrimitiveType, Schema};
//!
//! let schema = Schema::builder()
//!     .field("a", PrimitiveType::I32)
//!     .field("b", PrimitiveType::Bool)
//!     .field("c", PrimitiveType::F32)
//!     .build()
//!     .unwrap();
//! assert_eq!(schema.len(), 3);
//! ```
//!
//! or loaded from TOML:
//!
//! ```toml
//! [[fields]]
//! name = "a"
//! type = "i32"
//!
//! [[fields]]
//! name = "b"
//! type = "bool"
//! ```

use crate::error::{Error, Result};
use crate::primitive::PrimitiveType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named, typed field of a schema
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, unique within the schema
    pub name: String,
    /// Primitive type of the field
    #[serde(rename = "type")]
    pub ty: PrimitiveType,
}

impl FieldDef {
    /// Create a field definition
    pub fn new(name: impl Into<String>, ty: PrimitiveType) -> Self {
        FieldDef {
            name: name.into(),
            ty,
        }
    }
}

/// Ordered mapping of unique field names to primitive types
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SchemaDocument", into = "SchemaDocument")]
pub struct Schema {
    fields: Vec<FieldDef>,
}

/// On-disk shape of a schema
///
/// Type tags stay strings here; they are validated on conversion so that
/// tag and duplicate errors are reported as such, not as parse errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    tag: String,
}

impl Schema {
    /// Build a schema from field definitions
    ///
    /// # Errors
    ///
    /// Returns `DuplicateField` if a name appears more than once.
    pub fn new(fields: impl IntoIterator<Item = FieldDef>) -> Result<Self> {
        let fields: Vec<FieldDef> = fields.into_iter().collect();
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::DuplicateField(field.name.clone()));
            }
        }
        Ok(Schema { fields })
    }

    /// Build a schema from `(name, tag)` pairs
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` for an unknown tag and `DuplicateField`
    /// for a repeated name.
    pub fn from_tags<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let fields = pairs
            .into_iter()
            .map(|(name, tag)| -> Result<FieldDef> {
                Ok(FieldDef::new(name, PrimitiveType::from_tag(tag)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Schema::new(fields)
    }

    /// Start building a schema
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Parse a schema from a TOML document with a `[[fields]]` array
    ///
    /// # Errors
    ///
    /// Returns `Config` if the document is malformed, `UnsupportedType` for
    /// an unknown type tag and `DuplicateField` for a repeated name.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let doc: SchemaDocument = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse schema: {}", e)))?;
        Schema::try_from(doc)
    }

    /// Read and parse a schema from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or parsed, and the
    /// [`Schema::from_toml_str`] errors for invalid fields.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Schema::from_toml_str(&content)
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field definition by name
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a field in declaration order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

impl TryFrom<SchemaDocument> for Schema {
    type Error = Error;

    fn try_from(doc: SchemaDocument) -> Result<Self> {
        Schema::from_tags(doc.fields.iter().map(|f| (f.name.as_str(), f.tag.as_str())))
    }
}

impl From<Schema> for SchemaDocument {
    fn from(schema: Schema) -> Self {
        let fields = schema
            .fields
            .into_iter()
            .map(|f| FieldEntry {
                name: f.name,
                tag: f.ty.tag().to_string(),
            })
            .collect();
        SchemaDocument { fields }
    }
}

/// Builder for [`Schema`]
///
/// Tag parsing errors are deferred until [`SchemaBuilder::build`] so that
/// calls can be chained.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDef>,
    error: Option<Error>,
}

impl SchemaBuilder {
    /// Append a field
    pub fn field(mut self, name: impl Into<String>, ty: PrimitiveType) -> Self {
        self.fields.push(FieldDef::new(name, ty));
        self
    }

    /// Append a field by textual type tag
    pub fn field_tag(mut self, name: impl Into<String>, tag: &str) -> Self {
        match PrimitiveType::from_tag(tag) {
            Ok(ty) => self.fields.push(FieldDef::new(name, ty)),
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Finish the schema
    ///
    /// # Errors
    ///
    /// Returns the first `UnsupportedType` recorded by `field_tag`, or
    /// `DuplicateField` for a repeated name.
    pub fn build(self) -> Result<Schema> {
        if let Some(e) = self.error {
            return Err(e);
        }
        Schema::new(self.fields)
    }
}
