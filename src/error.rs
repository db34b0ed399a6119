//! Defines [`GeoSliceError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoSliceError {
    /// The first byte of a record is not one of the eight known type codes.
    #[error("Unknown geometry type code: {0}")]
    UnknownTag(u8),

    /// The input ended before the record did.
    #[error("Unexpected end of input at offset {0}")]
    UnexpectedEof(u64),

    /// A geometry that cannot be represented in this encoding.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An invariant of the encoder or decoder was violated.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Crate-specific result type.
pub type GeoSliceResult<T> = std::result::Result<T, GeoSliceError>;
