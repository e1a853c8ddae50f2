//! Error types.

use num_bigint::BigUint;
use thiserror::Error;

/// Field arithmetic errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The value does not lie in `[0, modulus)`.
    #[error("{value} is not in the field range 0..{modulus}")]
    OutOfRange {
        /// The rejected value.
        value: BigUint,
        /// The modulus of the target field.
        modulus: BigUint,
    },

    /// Two operands belong to fields with different moduli.
    #[error("cannot combine elements of different fields ({lhs} vs {rhs})")]
    ModulusMismatch {
        /// Modulus of the left operand.
        lhs: BigUint,
        /// Modulus of the right operand.
        rhs: BigUint,
    },
}

/// Result type.
pub type Result<T> = core::result::Result<T, FieldError>;
