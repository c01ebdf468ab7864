//! Struct array types
//!
//! A [`StructArrayType`] binds a schema to its compiled [`Layout`] and a
//! [`StructArrayConfig`]. Defining the type validates and compiles the
//! schema once; every container it builds shares the same layout.
//!
//! ```text
//! let points = StructArrayType::define(&schema);
//! let mut a = points.new_array();          // default capacity
//! let mut b = points.with_capacity(1024);  // explicit capacity
//! ```

use crate::array::StructArray;
use crate::config::StructArrayConfig;
use crate::layout::Layout;
use std::path::Path;
use std::sync::Arc;
use structarray_core::{Result, Schema};
use tracing::debug;

/// A reusable container constructor for one schema
#[derive(Debug, Clone)]
pub struct StructArrayType {
    layout: Arc<Layout>,
    config: StructArrayConfig,
}

impl StructArrayType {
    /// Define a type with the default configuration
    pub fn define(schema: &Schema) -> Self {
        StructArrayType::build(schema, StructArrayConfig::default())
    }

    /// Define a type with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration fails validation.
    pub fn with_config(schema: &Schema, config: StructArrayConfig) -> Result<Self> {
        config.validate()?;
        Ok(StructArrayType::build(schema, config))
    }

    /// Define a type from `(name, tag)` pairs
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` for an unknown tag and `DuplicateField`
    /// for a repeated name.
    pub fn from_tags<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        Ok(StructArrayType::define(&Schema::from_tags(pairs)?))
    }

    /// Define a type from a schema file and an optional config file
    ///
    /// # Errors
    ///
    /// Returns the schema loader's error for a bad schema file and `Config`
    /// for a bad config file.
    pub fn from_files(schema_path: &Path, config_path: Option<&Path>) -> Result<Self> {
        let schema = Schema::from_file(schema_path)?;
        let config = match config_path {
            Some(path) => StructArrayConfig::from_file(path)?,
            None => StructArrayConfig::default(),
        };
        StructArrayType::with_config(&schema, config)
    }

    fn build(schema: &Schema, config: StructArrayConfig) -> Self {
        let layout = Arc::new(Layout::compile_with(schema, config.packing));
        debug!(
            target: "structarray::layout",
            record_size = layout.record_size(),
            default_capacity = config.default_capacity,
            "Struct array type defined"
        );
        StructArrayType { layout, config }
    }

    /// The compiled layout shared by every container of this type
    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// The schema this type was defined from
    pub fn schema(&self) -> &Schema {
        self.layout.schema()
    }

    /// Configuration applied to new containers
    pub fn config(&self) -> &StructArrayConfig {
        &self.config
    }

    /// Bytes per record
    pub fn record_size(&self) -> usize {
        self.layout.record_size()
    }

    /// Build an empty container with the configured default capacity
    pub fn new_array(&self) -> StructArray {
        self.with_capacity(self.config.default_capacity)
    }

    /// Build an empty container with room for `capacity` records
    pub fn with_capacity(&self, capacity: usize) -> StructArray {
        StructArray::with_growth_floor(
            Arc::clone(&self.layout),
            capacity,
            self.config.growth_floor,
        )
    }
}
