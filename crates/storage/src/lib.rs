//! Storage layer for struct arrays
//!
//! This crate turns a [`Schema`](structarray_core::Schema) into packed
//! binary storage:
//! - Layout: schema compiler (offsets, record size, bound field codecs)
//! - Codec: little-endian encode/decode of every primitive type
//! - RecordBuffer: one contiguous, zero-initialized allocation
//! - StructArray: the growable record container with index and cursor access
//! - StructArrayType: the reusable constructor binding layout and config
//!
//! # Access Paths
//!
//! Dynamic access goes through [`Value`](structarray_core::Value) and field
//! codecs chosen once per field when the layout is compiled. Typed access
//! goes through [`FieldAccessor`], which is monomorphized per primitive type
//! and never touches `Value`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod array_type;
pub mod buffer;
pub mod codec;
pub mod config;
pub mod layout;

pub use array::{Iter, StructArray};
pub use array_type::StructArrayType;
pub use buffer::{BufferStats, RecordBuffer};
pub use codec::{codec_for, FieldCodec, FieldOrder};
pub use config::{StructArrayConfig, DEFAULT_CAPACITY, DEFAULT_GROWTH_FLOOR};
pub use layout::{FieldAccessor, FieldLayout, Layout, Packing};
