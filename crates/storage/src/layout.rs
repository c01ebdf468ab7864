//! Schema compiler
//!
//! [`Layout`] is the compiled form of a [`Schema`]: byte offsets for every
//! field, the total record size, and the bound decode/encode operation of
//! every field. It is computed once per schema and shared read-only
//! (`Arc<Layout>`) by every container built from it.
//!
//! # Record Format
//!
//! ```text
//! Record (Packing::Declaration), schema {a: i32, b: bool, c: f32}:
//! ┌──────────────────┬─────────────┬──────────────────┐
//! │ a (4 bytes, LE)  │ b (1 byte)  │ c (4 bytes, LE)  │
//! └──────────────────┴─────────────┴──────────────────┘
//! offset 0           4             5                  9 = record_size
//! ```
//!
//! There is never padding between fields. Under `Packing::SizeDescending`
//! the same fields are laid out widest first (`a`, `c`, `b`), which keeps
//! every field naturally aligned relative to the record start.

use crate::codec::{codec_for, DecodeFn, EncodeFn, FieldCodec};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use structarray_core::{Error, PrimitiveType, Record, Result, Schema, Value};
use tracing::debug;

/// Strategy for assigning byte offsets to fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Packing {
    /// Fields are stored in declaration order (default)
    #[default]
    Declaration,
    /// Fields are stored widest first; ties keep declaration order
    SizeDescending,
}

/// Compiled layout of one field
#[derive(Clone)]
pub struct FieldLayout {
    name: String,
    ty: PrimitiveType,
    offset: usize,
    decode: DecodeFn,
    encode: EncodeFn,
}

impl FieldLayout {
    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primitive type
    pub fn ty(&self) -> PrimitiveType {
        self.ty
    }

    /// Byte offset relative to the start of a record
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte width
    pub fn width(&self) -> usize {
        self.ty.byte_width()
    }

    /// Decode this field from the record starting at `record[0]`
    #[inline]
    pub fn decode(&self, record: &[u8]) -> Value {
        (self.decode)(&record[self.offset..])
    }

    /// Encode this field into the record starting at `record[0]`
    #[inline]
    pub fn encode(&self, record: &mut [u8], value: &Value) {
        (self.encode)(&mut record[self.offset..], value)
    }
}

impl fmt::Debug for FieldLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldLayout")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("offset", &self.offset)
            .finish()
    }
}

/// Statically typed handle to one field
///
/// Obtained once through [`Layout::accessor`], which verifies the field's
/// type. Reads and writes through the handle are monomorphized for `T` and
/// skip the [`Value`] representation entirely.
#[derive(Debug)]
pub struct FieldAccessor<T> {
    offset: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldAccessor<T> {}

impl<T: FieldCodec> FieldAccessor<T> {
    /// Byte offset relative to the start of a record
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Read the field from the record starting at `record[0]`
    #[inline(always)]
    pub fn read(&self, record: &[u8]) -> T {
        T::read(&record[self.offset..])
    }

    /// Write the field into the record starting at `record[0]`
    #[inline(always)]
    pub fn write(&self, record: &mut [u8], value: T) {
        T::write(&mut record[self.offset..], value)
    }
}

/// Compiled, immutable record layout of a schema
#[derive(Debug)]
pub struct Layout {
    schema: Schema,
    fields: Vec<FieldLayout>,
    names: Arc<[String]>,
    record_size: usize,
    packing: Packing,
}

impl Layout {
    /// Compile a schema with the default (declaration order) packing
    pub fn compile(schema: &Schema) -> Layout {
        Layout::compile_with(schema, Packing::Declaration)
    }

    /// Compile a schema with an explicit packing strategy
    pub fn compile_with(schema: &Schema, packing: Packing) -> Layout {
        let defs = schema.fields();

        // Physical order: indices into `defs`
        let mut order: Vec<usize> = (0..defs.len()).collect();
        if packing == Packing::SizeDescending {
            // sort_by is stable, so equal widths keep declaration order
            order.sort_by(|&a, &b| defs[b].ty.byte_width().cmp(&defs[a].ty.byte_width()));
        }

        let mut offsets = vec![0usize; defs.len()];
        let mut record_size = 0;
        for &i in &order {
            offsets[i] = record_size;
            record_size += defs[i].ty.byte_width();
        }

        let fields: Vec<FieldLayout> = defs
            .iter()
            .zip(offsets)
            .map(|(def, offset)| {
                let (decode, encode) = codec_for(def.ty);
                FieldLayout {
                    name: def.name.clone(),
                    ty: def.ty,
                    offset,
                    decode,
                    encode,
                }
            })
            .collect();
        let names: Arc<[String]> = defs.iter().map(|d| d.name.clone()).collect();

        debug!(
            target: "structarray::layout",
            fields = fields.len(),
            record_size,
            ?packing,
            "Layout compiled"
        );

        Layout {
            schema: schema.clone(),
            fields,
            names,
            record_size,
            packing,
        }
    }

    /// The schema this layout was compiled from
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Packing strategy used for the offsets
    pub fn packing(&self) -> Packing {
        self.packing
    }

    /// Bytes per record (0 for an empty schema)
    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Field layouts in declaration order
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Shared field names in declaration order
    pub fn names(&self) -> &Arc<[String]> {
        &self.names
    }

    /// Position of a field in declaration order
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Field layout by name
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Byte offset of a field by name
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(FieldLayout::offset)
    }

    /// Typed handle to a field
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` if the schema has no such field and
    /// `TypeMismatch` if the field is not of type `T`.
    pub fn accessor<T: FieldCodec>(&self, name: &str) -> Result<FieldAccessor<T>> {
        let field = self
            .field(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))?;
        if field.ty != T::TYPE {
            return Err(Error::TypeMismatch {
                field: name.to_string(),
                expected: field.ty,
                actual: T::TYPE,
            });
        }
        Ok(FieldAccessor {
            offset: field.offset,
            _marker: PhantomData,
        })
    }

    /// Decode one field of the record starting at `record[0]`
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a valid field index.
    #[inline]
    pub fn decode_field(&self, field: usize, record: &[u8]) -> Value {
        self.fields[field].decode(record)
    }

    /// Encode one field of the record starting at `record[0]`
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a valid field index.
    #[inline]
    pub fn encode_field(&self, field: usize, record: &mut [u8], value: &Value) {
        self.fields[field].encode(record, value)
    }

    /// Decode every field of the record starting at `record[0]`
    pub fn decode_record(&self, record: &[u8]) -> Record {
        let values = self.fields.iter().map(|f| f.decode(record)).collect();
        Record::from_parts(Arc::clone(&self.names), values)
    }

    /// Encode values (declaration order) into the record starting at `record[0]`
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` unless exactly one value per field is
    /// supplied. Nothing is written in that case.
    pub fn encode_values(&self, record: &mut [u8], values: &[Value]) -> Result<()> {
        self.check_arity(values.len())?;
        for (field, value) in self.fields.iter().zip(values) {
            field.encode(record, value);
        }
        Ok(())
    }

    /// Encode a record into the record slot starting at `record[0]`
    ///
    /// Values are matched to fields by name, so a record from another layout
    /// with the same fields in a different order is stored correctly.
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` if the record has the wrong number of
    /// fields and `MissingField` if it lacks one of the layout's fields.
    /// Nothing is written in either case.
    pub fn encode_record(&self, record: &mut [u8], value: &Record) -> Result<()> {
        let values = self.record_values(value)?;
        for (field, value) in self.fields.iter().zip(values.iter()) {
            field.encode(record, value);
        }
        Ok(())
    }

    /// Values of `record` in this layout's declaration order
    ///
    /// Borrows the record's values when its names are this layout's names;
    /// otherwise looks every field up by name.
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` if the record has the wrong number of
    /// fields and `MissingField` if it lacks one of the layout's fields.
    pub fn record_values<'r>(&self, record: &'r Record) -> Result<Cow<'r, [Value]>> {
        self.check_arity(record.len())?;
        if Arc::ptr_eq(record.shared_names(), &self.names) || record.names() == &self.names[..] {
            return Ok(Cow::Borrowed(record.values()));
        }
        // Equal counts and unique names: every field found means a bijection
        self.fields
            .iter()
            .map(|field| {
                record
                    .get(&field.name)
                    .copied()
                    .ok_or_else(|| Error::MissingField(field.name.clone()))
            })
            .collect::<Result<Vec<_>>>()
            .map(Cow::Owned)
    }

    /// Build a record from values in declaration order
    ///
    /// Values are converted to the field types, so the record reads back
    /// exactly as it will be stored.
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` unless exactly one value per field is
    /// supplied.
    pub fn record<I, V>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.check_arity(values.len())?;
        let values = self
            .fields
            .iter()
            .zip(values)
            .map(|(field, value)| convert(field.ty, &value))
            .collect();
        Ok(Record::from_parts(Arc::clone(&self.names), values))
    }

    /// Build a record from `(name, value)` pairs in any order
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` for a name outside the schema and
    /// `MissingField` for the first field without a value.
    pub fn record_from_pairs<'a, I, V>(&self, pairs: I) -> Result<Record>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<Value>,
    {
        let mut values: Vec<Option<Value>> = vec![None; self.fields.len()];
        for (name, value) in pairs {
            let index = self
                .field_index(name)
                .ok_or_else(|| Error::UnknownField(name.to_string()))?;
            values[index] = Some(convert(self.fields[index].ty, &value.into()));
        }
        let values = values
            .into_iter()
            .zip(&self.fields)
            .map(|(value, field)| value.ok_or_else(|| Error::MissingField(field.name.clone())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Record::from_parts(Arc::clone(&self.names), values))
    }

    /// A record with every field set to zero / false
    pub fn zeroed_record(&self) -> Record {
        let values = self.fields.iter().map(|f| Value::zero(f.ty)).collect();
        Record::from_parts(Arc::clone(&self.names), values)
    }

    #[inline]
    pub(crate) fn check_arity(&self, actual: usize) -> Result<()> {
        if actual != self.fields.len() {
            return Err(Error::FieldCountMismatch {
                expected: self.fields.len(),
                actual,
            });
        }
        Ok(())
    }
}

/// Convert a value to the given field type with the codec's semantics
fn convert(ty: PrimitiveType, value: &Value) -> Value {
    let (decode, encode) = codec_for(ty);
    let mut scratch = [0u8; 8];
    encode(&mut scratch, value);
    decode(&scratch)
}
