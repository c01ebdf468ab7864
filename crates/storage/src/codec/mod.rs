//! Field codecs.
//!
//! Each primitive type has exactly one codec, implemented once for the
//! Rust scalar behind it ([`FieldCodec`]). The schema compiler resolves a
//! field's codec a single time and keeps plain function pointers to the
//! monomorphized `decode_value::<T>` / `encode_value::<T>` pair, so record
//! access never branches on the field type.
//!
//! # Byte Format
//!
//! - Multi-byte integers: two's complement / unsigned, little-endian
//! - Floats: IEEE-754 binary32 / binary64, little-endian
//! - Booleans: one byte, `1` for true, `0` for false; any non-zero byte
//!   decodes as true

mod traits;

pub use traits::{decode_value, encode_value, FieldCodec, FieldOrder};

use structarray_core::{PrimitiveType, Value};

/// Bound decode operation for one field.
pub type DecodeFn = fn(&[u8]) -> Value;

/// Bound encode operation for one field.
pub type EncodeFn = fn(&mut [u8], &Value);

fn pair<T: FieldCodec>() -> (DecodeFn, EncodeFn) {
    (decode_value::<T>, encode_value::<T>)
}

/// Resolve the codec pair for a primitive type.
///
/// This is the only place that branches on [`PrimitiveType`].
pub fn codec_for(ty: PrimitiveType) -> (DecodeFn, EncodeFn) {
    match ty {
        PrimitiveType::Bool => pair::<bool>(),
        PrimitiveType::I8 => pair::<i8>(),
        PrimitiveType::I16 => pair::<i16>(),
        PrimitiveType::I32 => pair::<i32>(),
        PrimitiveType::I64 => pair::<i64>(),
        PrimitiveType::U8 => pair::<u8>(),
        PrimitiveType::U16 => pair::<u16>(),
        PrimitiveType::U32 => pair::<u32>(),
        PrimitiveType::U64 => pair::<u64>(),
        PrimitiveType::F32 => pair::<f32>(),
        PrimitiveType::F64 => pair::<f64>(),
    }
}
