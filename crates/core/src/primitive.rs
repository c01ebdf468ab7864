//! Primitive type registry
//!
//! Every field of a schema has one of eleven fixed-width primitive types.
//! The registry is the single place where textual type tags are validated;
//! once a schema is built, no further type checks happen on the access path.
//!
//! ## The Primitive Types
//!
//! | Type | Kind | Width | Tag |
//! |------|------|-------|-----|
//! | Bool | Bool | 1 | `bool` |
//! | I8 / I16 / I32 / I64 | Signed | 1 / 2 / 4 / 8 | `i8` ... `i64` |
//! | U8 / U16 / U32 / U64 | Unsigned | 1 / 2 / 4 / 8 | `u8` ... `u64` |
//! | F32 / F64 | Float | 4 / 8 | `f32`, `f64` |
//!
//! Aliases accepted by [`PrimitiveType::from_tag`]: `u53` (u64), `i54` (i64),
//! `float32` (f32), `float64` (f64).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family of a primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// One-byte boolean
    Bool,
    /// Two's complement signed integer
    Signed,
    /// Unsigned integer
    Unsigned,
    /// IEEE-754 float
    Float,
}

/// A fixed-width primitive field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PrimitiveType {
    /// Boolean, stored as one byte
    Bool,
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
}

impl PrimitiveType {
    /// All primitive types (for iteration)
    pub const ALL: [PrimitiveType; 11] = [
        PrimitiveType::Bool,
        PrimitiveType::I8,
        PrimitiveType::I16,
        PrimitiveType::I32,
        PrimitiveType::I64,
        PrimitiveType::U8,
        PrimitiveType::U16,
        PrimitiveType::U32,
        PrimitiveType::U64,
        PrimitiveType::F32,
        PrimitiveType::F64,
    ];

    /// Look up the type for a kind and byte width
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` for combinations without a primitive type,
    /// e.g. a 2-byte float or an 8-byte boolean.
    pub fn new(kind: PrimitiveKind, byte_width: usize) -> Result<Self> {
        let ty = match (kind, byte_width) {
            (PrimitiveKind::Bool, 1) => PrimitiveType::Bool,
            (PrimitiveKind::Signed, 1) => PrimitiveType::I8,
            (PrimitiveKind::Signed, 2) => PrimitiveType::I16,
            (PrimitiveKind::Signed, 4) => PrimitiveType::I32,
            (PrimitiveKind::Signed, 8) => PrimitiveType::I64,
            (PrimitiveKind::Unsigned, 1) => PrimitiveType::U8,
            (PrimitiveKind::Unsigned, 2) => PrimitiveType::U16,
            (PrimitiveKind::Unsigned, 4) => PrimitiveType::U32,
            (PrimitiveKind::Unsigned, 8) => PrimitiveType::U64,
            (PrimitiveKind::Float, 4) => PrimitiveType::F32,
            (PrimitiveKind::Float, 8) => PrimitiveType::F64,
            (kind, width) => {
                return Err(Error::unsupported(format!("{:?}/{}", kind, width)));
            }
        };
        Ok(ty)
    }

    /// Parse from a textual type tag
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` for any tag outside the registry, including
    /// `smi` and `bitflag`, which have no fixed byte representation here.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "bool" => Ok(PrimitiveType::Bool),
            "i8" => Ok(PrimitiveType::I8),
            "i16" => Ok(PrimitiveType::I16),
            "i32" => Ok(PrimitiveType::I32),
            "i64" | "i54" => Ok(PrimitiveType::I64),
            "u8" => Ok(PrimitiveType::U8),
            "u16" => Ok(PrimitiveType::U16),
            "u32" => Ok(PrimitiveType::U32),
            "u64" | "u53" => Ok(PrimitiveType::U64),
            "f32" | "float32" => Ok(PrimitiveType::F32),
            "f64" | "float64" => Ok(PrimitiveType::F64),
            other => Err(Error::unsupported(other)),
        }
    }

    /// Canonical tag
    pub const fn tag(&self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
        }
    }

    /// Type family
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveType::Bool => PrimitiveKind::Bool,
            PrimitiveType::I8 | PrimitiveType::I16 | PrimitiveType::I32 | PrimitiveType::I64 => {
                PrimitiveKind::Signed
            }
            PrimitiveType::U8 | PrimitiveType::U16 | PrimitiveType::U32 | PrimitiveType::U64 => {
                PrimitiveKind::Unsigned
            }
            PrimitiveType::F32 | PrimitiveType::F64 => PrimitiveKind::Float,
        }
    }

    /// Number of bytes one value occupies in a record
    pub const fn byte_width(&self) -> usize {
        match self {
            PrimitiveType::Bool | PrimitiveType::I8 | PrimitiveType::U8 => 1,
            PrimitiveType::I16 | PrimitiveType::U16 => 2,
            PrimitiveType::I32 | PrimitiveType::U32 | PrimitiveType::F32 => 4,
            PrimitiveType::I64 | PrimitiveType::U64 | PrimitiveType::F64 => 8,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PrimitiveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PrimitiveType::from_tag(s)
    }
}

impl TryFrom<String> for PrimitiveType {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self> {
        PrimitiveType::from_tag(&tag)
    }
}

impl From<PrimitiveType> for String {
    fn from(ty: PrimitiveType) -> Self {
        ty.tag().to_string()
    }
}
