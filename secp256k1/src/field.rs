//! Field arithmetic modulo p = 2²⁵⁶ − 2³² − 977.

use crate::FIELD_MODULUS;
use num_bigint::{BigInt, BigUint};
use primefield::{FieldElement, Result};

/// Creates an element of the secp256k1 coordinate field.
pub fn element(value: BigUint) -> Result<FieldElement> {
    FieldElement::new(value, FIELD_MODULUS.clone())
}

/// Square root in the coordinate field.
///
/// Computes `v^((p+1)/4)` — an integer exponent because `p ≡ 3 (mod 4)`.
/// By Fermat's little theorem the result squares back to `v` whenever `v`
/// has a square root at all. The input is not checked for being a quadratic
/// residue; callers that need certainty must square the result and compare.
pub fn sqrt(v: &FieldElement) -> FieldElement {
    let exponent = (&*FIELD_MODULUS + 1u32) >> 2u32;
    v.pow(&BigInt::from(exponent))
}
