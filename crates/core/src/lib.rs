//! Core types for struct arrays
//!
//! This crate defines the foundational types used by the storage crate:
//! - PrimitiveType: the registry of fixed-width field types
//! - Value / Scalar: decoded field values and the Rust types behind them
//! - Schema: ordered, uniquely named, typed fields
//! - Record: a decoded struct (field→value mapping)
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod primitive;
pub mod record;
pub mod schema;
pub mod value;

pub use error::{Error, Result};
pub use primitive::{PrimitiveKind, PrimitiveType};
pub use record::Record;
pub use schema::{FieldDef, Schema, SchemaBuilder};
pub use value::{Scalar, Value};
