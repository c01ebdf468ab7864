//! Decoded record values
//!
//! A [`Record`] is the transient, owned form of one struct: a value for
//! every field, in declaration order. Records are produced by decoding
//! bytes out of a buffer and consumed by encoding them back; the container
//! never stores them.
//!
//! Field names are shared (`Arc<[String]>`) with the layout that produced
//! them, so decoding a record allocates only the value vector.

use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// An owned field→value mapping for one struct
#[derive(Clone)]
pub struct Record {
    names: Arc<[String]>,
    values: Vec<Value>,
}

impl Record {
    /// Create a record from shared field names and values in the same order
    ///
    /// Callers are responsible for supplying one value per name; layouts
    /// validate this before handing records out.
    pub fn from_parts(names: Arc<[String]>, values: Vec<Value>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Record { names, values }
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|i| &self.values[i])
    }

    /// Overwrite a field by name, returning the previous value
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        let i = self.position(name)?;
        Some(std::mem::replace(&mut self.values[i], value.into()))
    }

    /// Values in declaration order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Mutable values in declaration order
    pub fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    /// Field names in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Field names as shared with the layout that produced the record
    pub fn shared_names(&self) -> &Arc<[String]> {
        &self.names
    }

    /// Iterate over `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Consume the record, returning its values
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

// Field-wise equality: names and values must match in order.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.names, &other.names) || self.names == other.names)
            && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Index<&str> for Record {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the record has no field with this name.
    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no field named '{}' in record", name),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
