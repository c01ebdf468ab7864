//! StructArray - schema-driven arrays of fixed-layout records
//!
//! A struct array stores records of one schema back to back in a single
//! contiguous byte buffer. Every field has a fixed primitive type and a
//! fixed byte offset, so a record is just a slice of `record_size` bytes.
//!
//! # Quick Start
//!
//! ```
//! use structarray::{Schema, StructArrayType, Value};
//!
//! let schema = Schema::from_tags([("a", "i32"), ("b", "bool"), ("c", "f32")])?;
//! let points = StructArrayType::define(&schema);
//! let mut array = points.new_array();
//!
//! let record = points.layout().record([Value::I32(2), Value::Bool(true), Value::F32(3.5)])?;
//! array.push(&record)?;
//! assert_eq!(array.get(0), record);
//!
//! // Cursor access reads or writes single fields without decoding a record
//! let c = points.layout().accessor::<f32>("c")?;
//! array.move_to(0);
//! array.write(c, 1.25);
//! assert_eq!(array.get(0)["c"], Value::F32(1.25));
//! # Ok::<(), structarray::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `structarray-core`: primitive types, schemas, values, records, errors
//! - `structarray-storage`: layouts, codecs, the record buffer and containers

pub use structarray_core::*;
pub use structarray_storage::*;
