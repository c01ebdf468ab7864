//! Field codec trait definitions.

use byteorder::{ByteOrder, LittleEndian};
use structarray_core::{Scalar, Value};

/// Byte order of every multi-byte field in a record buffer.
pub type FieldOrder = LittleEndian;

/// Field codec trait.
///
/// Every scalar that can live in a record implements this trait. Reads and
/// writes operate on the first `T::TYPE.byte_width()` bytes of the slice
/// they are given; the slice starts at the field's absolute byte offset.
///
/// # Panics
///
/// `read` and `write` panic if the slice is shorter than the field width.
/// This is the only bounds check on the unchecked access path.
pub trait FieldCodec: Scalar {
    /// Decode one value from the start of `bytes`.
    fn read(bytes: &[u8]) -> Self;

    /// Encode one value into the start of `bytes`.
    fn write(bytes: &mut [u8], value: Self);
}

impl FieldCodec for bool {
    #[inline(always)]
    fn read(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }

    #[inline(always)]
    fn write(bytes: &mut [u8], value: Self) {
        bytes[0] = u8::from(value);
    }
}

impl FieldCodec for u8 {
    #[inline(always)]
    fn read(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline(always)]
    fn write(bytes: &mut [u8], value: Self) {
        bytes[0] = value;
    }
}

impl FieldCodec for i8 {
    #[inline(always)]
    fn read(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    #[inline(always)]
    fn write(bytes: &mut [u8], value: Self) {
        bytes[0] = value as u8;
    }
}

macro_rules! impl_byteorder_codec {
    ($($ty:ty => $read:ident, $write:ident);* $(;)?) => {
        $(
            impl FieldCodec for $ty {
                #[inline(always)]
                fn read(bytes: &[u8]) -> Self {
                    FieldOrder::$read(bytes)
                }

                #[inline(always)]
                fn write(bytes: &mut [u8], value: Self) {
                    FieldOrder::$write(bytes, value)
                }
            }
        )*
    };
}

impl_byteorder_codec! {
    i16 => read_i16, write_i16;
    i32 => read_i32, write_i32;
    i64 => read_i64, write_i64;
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}

/// Decode a field as a [`Value`]; one instantiation per scalar type.
#[inline]
pub fn decode_value<T: FieldCodec>(bytes: &[u8]) -> Value {
    T::read(bytes).into_value()
}

/// Encode a [`Value`] into a field; one instantiation per scalar type.
#[inline]
pub fn encode_value<T: FieldCodec>(bytes: &mut [u8], value: &Value) {
    T::write(bytes, T::from_value(value))
}
