//! Error types.

use crate::ecdsa::InvalidSecretKey;
use primefield::FieldError;
use thiserror::Error;
use weierstrass::PointError;

/// Malformed SEC or DER bytes.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The input is empty.
    #[error("input is empty")]
    Empty,

    /// The first byte is not a recognized SEC prefix.
    #[error("unknown SEC prefix byte {0:#04x}")]
    InvalidSecPrefix(u8),

    /// The input length does not match what the SEC prefix demands.
    #[error("SEC encoding must be {expected} bytes, got {actual}")]
    SecLength {
        /// Length implied by the prefix byte.
        expected: usize,
        /// Length of the input.
        actual: usize,
    },

    /// The point at infinity cannot be SEC encoded.
    #[error("the point at infinity has no SEC encoding")]
    PointAtInfinity,

    /// The DER signature does not start with the 0x30 sequence tag.
    #[error("bad DER signature prefix {0:#04x}")]
    InvalidDerPrefix(u8),

    /// The DER length byte does not cover the rest of the input exactly.
    #[error("DER length byte disagrees with the signature length")]
    DerLengthMismatch,

    /// An integer does not carry the 0x02 marker.
    #[error("expected DER integer marker 0x02, got {0:#04x}")]
    InvalidDerMarker(u8),

    /// The input ended in the middle of a field.
    #[error("DER signature is truncated")]
    DerTruncated,

    /// Bytes remain after the second integer.
    #[error("trailing bytes after the DER signature")]
    DerTrailingBytes,
}

/// Any error this crate produces.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Field-level arithmetic error.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Point construction or group-law error.
    #[error(transparent)]
    Point(#[from] PointError),

    /// Malformed SEC or DER bytes.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The private-key secret is out of range.
    #[error(transparent)]
    SecretKey(#[from] InvalidSecretKey),
}
