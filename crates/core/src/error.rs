//! Error types for struct arrays
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Errors fall into two groups:
//! - Schema errors, raised once while a schema is defined or compiled
//! - Container errors, raised by capacity management and the checked accessors
//!
//! The unchecked fast paths of the container never return errors.

use crate::primitive::PrimitiveType;
use thiserror::Error;

/// Result type alias for struct array operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for struct arrays
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A type tag (or kind/width pair) that has no primitive type
    #[error("Unsupported type: {tag}")]
    UnsupportedType {
        /// The rejected tag
        tag: String,
    },

    /// The same field name was declared twice
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// A field name that is not part of the schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A record did not supply a value for a field
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A typed accessor was requested with the wrong primitive type
    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Field name
        field: String,
        /// Type declared in the schema
        expected: PrimitiveType,
        /// Type requested by the caller
        actual: PrimitiveType,
    },

    /// A record carried the wrong number of values
    #[error("Field count mismatch: expected {expected}, got {actual}")]
    FieldCountMismatch {
        /// Number of fields in the layout
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Capacity cannot hold the populated records
    #[error("Invalid capacity: cannot shrink to {requested} when length is {length}")]
    InvalidCapacity {
        /// Requested capacity
        requested: usize,
        /// Current length
        length: usize,
    },

    /// Index outside of the populated range
    #[error("Index out of bounds: {index} (length {length})")]
    OutOfBounds {
        /// Offending index
        index: usize,
        /// Current length
        length: usize,
    },

    /// Configuration or schema document could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an `UnsupportedType` error from any tag-like value
    pub fn unsupported(tag: impl Into<String>) -> Self {
        Error::UnsupportedType { tag: tag.into() }
    }

    /// Create a `Config` error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Check if this error was raised while defining a schema
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedType { .. }
                | Error::DuplicateField(_)
                | Error::UnknownField(_)
                | Error::TypeMismatch { .. }
        )
    }

    /// Check if this error is an index bounds violation
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Error::OutOfBounds { .. })
    }
}
