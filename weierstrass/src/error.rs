//! Error types.

use primefield::FieldError;
use thiserror::Error;

/// Errors from point construction and the group law.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PointError {
    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// The operands lie on curves with different coefficients.
    #[error("points lie on different curves")]
    CurveMismatch,

    /// Field arithmetic failed beneath the group law.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Result type.
pub type Result<T> = core::result::Result<T, PointError>;
