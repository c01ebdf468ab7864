//! Value types for struct arrays
//!
//! This module defines:
//! - Value: one decoded field value, one variant per primitive type
//! - Scalar: the Rust primitive types that can be stored in a field
//!
//! ## Type Rules
//!
//! - A value decoded from a field always carries the field's exact type
//!   (`I64` for an `i64` field, never a wider or narrower variant).
//! - 64-bit integers are carried as native `i64`/`u64`, so every value
//!   round-trips bit-for-bit.
//! - Float equality follows IEEE-754 semantics: `NaN != NaN`, `-0.0 == 0.0`.
//!   Use [`Value::bit_eq`] for exact comparison.
//!
//! ## Conversions
//!
//! Encoding a value into a field of a different type converts it the way a
//! Rust `as` cast does. Booleans become `0`/`1`, and numbers become `true`
//! when they are non-zero.

use crate::primitive::PrimitiveType;
use serde::Serialize;

/// One decoded field value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
}

impl Value {
    /// The primitive type this value carries
    pub const fn primitive_type(&self) -> PrimitiveType {
        match self {
            Value::Bool(_) => PrimitiveType::Bool,
            Value::I8(_) => PrimitiveType::I8,
            Value::I16(_) => PrimitiveType::I16,
            Value::I32(_) => PrimitiveType::I32,
            Value::I64(_) => PrimitiveType::I64,
            Value::U8(_) => PrimitiveType::U8,
            Value::U16(_) => PrimitiveType::U16,
            Value::U32(_) => PrimitiveType::U32,
            Value::U64(_) => PrimitiveType::U64,
            Value::F32(_) => PrimitiveType::F32,
            Value::F64(_) => PrimitiveType::F64,
        }
    }

    /// Zero value of the given type
    pub const fn zero(ty: PrimitiveType) -> Value {
        match ty {
            PrimitiveType::Bool => Value::Bool(false),
            PrimitiveType::I8 => Value::I8(0),
            PrimitiveType::I16 => Value::I16(0),
            PrimitiveType::I32 => Value::I32(0),
            PrimitiveType::I64 => Value::I64(0),
            PrimitiveType::U8 => Value::U8(0),
            PrimitiveType::U16 => Value::U16(0),
            PrimitiveType::U32 => Value::U32(0),
            PrimitiveType::U64 => Value::U64(0),
            PrimitiveType::F32 => Value::F32(0.0),
            PrimitiveType::F64 => Value::F64(0.0),
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is a signed integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(v) => Some(i64::from(*v)),
            Value::I16(v) => Some(i64::from(*v)),
            Value::I32(v) => Some(i64::from(*v)),
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as u64 if this is an unsigned integer value
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U8(v) => Some(u64::from(*v)),
            Value::U16(v) => Some(u64::from(*v)),
            Value::U32(v) => Some(u64::from(*v)),
            Value::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as f64 if this is a float value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert to a Rust scalar with `as`-cast semantics
    pub fn cast<T: Scalar>(&self) -> T {
        T::from_value(self)
    }

    /// Exact equality: same type and identical bits
    ///
    /// Unlike `==`, two NaNs with the same payload compare equal and
    /// `-0.0` differs from `0.0`.
    pub fn bit_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
            (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
            (a, b) => a == b,
        }
    }
}

/// A Rust primitive type that maps onto exactly one [`PrimitiveType`]
pub trait Scalar: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// The primitive type of fields holding this scalar
    const TYPE: PrimitiveType;

    /// Convert any value into this scalar with `as`-cast semantics
    fn from_value(value: &Value) -> Self;

    /// Wrap this scalar in its value variant
    fn into_value(self) -> Value;
}

impl Scalar for bool {
    const TYPE: PrimitiveType = PrimitiveType::Bool;

    #[inline]
    fn from_value(value: &Value) -> Self {
        match *value {
            Value::Bool(b) => b,
            Value::I8(v) => v != 0,
            Value::I16(v) => v != 0,
            Value::I32(v) => v != 0,
            Value::I64(v) => v != 0,
            Value::U8(v) => v != 0,
            Value::U16(v) => v != 0,
            Value::U32(v) => v != 0,
            Value::U64(v) => v != 0,
            Value::F32(v) => v != 0.0,
            Value::F64(v) => v != 0.0,
        }
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! impl_numeric_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const TYPE: PrimitiveType = PrimitiveType::$variant;

                #[inline]
                fn from_value(value: &Value) -> Self {
                    match *value {
                        Value::Bool(b) => u8::from(b) as $ty,
                        Value::I8(v) => v as $ty,
                        Value::I16(v) => v as $ty,
                        Value::I32(v) => v as $ty,
                        Value::I64(v) => v as $ty,
                        Value::U8(v) => v as $ty,
                        Value::U16(v) => v as $ty,
                        Value::U32(v) => v as $ty,
                        Value::U64(v) => v as $ty,
                        Value::F32(v) => v as $ty,
                        Value::F64(v) => v as $ty,
                    }
                }

                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_numeric_scalar! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
