//! Prime field arithmetic with a runtime modulus.
//!
//! [`FieldElement`] pairs a value with the modulus of the field it lives in.
//! Every operation checks that both operands share one modulus and returns a
//! fresh element normalized into `[0, modulus)`; nothing is mutated in place.
//! Inversion and division go through Fermat's little theorem, so the modulus
//! must be prime for the arithmetic to be meaningful.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod error;

pub use crate::error::{FieldError, Result};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// An element of a prime field, carrying the field modulus alongside the
/// reduced value.
///
/// Equality is structural: two elements are equal only when both the value
/// and the modulus agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl FieldElement {
    /// Creates the element `value` of the field with the given modulus.
    ///
    /// Returns [`FieldError::OutOfRange`] unless `0 <= value < modulus`.
    pub fn new(value: BigUint, modulus: BigUint) -> Result<Self> {
        if value >= modulus {
            return Err(FieldError::OutOfRange { value, modulus });
        }
        Ok(Self { value, modulus })
    }

    /// Creates an element without checking `value < modulus`.
    ///
    /// For known-reduced constants such as standardized curve parameters;
    /// the caller is responsible for the range invariant.
    pub fn new_unchecked(value: BigUint, modulus: BigUint) -> Self {
        Self { value, modulus }
    }

    /// The additive identity of the field with the given modulus.
    pub fn zero(modulus: BigUint) -> Self {
        Self {
            value: BigUint::zero(),
            modulus,
        }
    }

    /// The multiplicative identity of the field with the given modulus.
    pub fn one(modulus: BigUint) -> Self {
        Self {
            value: BigUint::one(),
            modulus,
        }
    }

    /// The reduced value in `[0, modulus)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The field modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether the value is even.
    pub fn is_even(&self) -> bool {
        !self.value.bit(0)
    }

    fn check_same_field(&self, other: &Self) -> Result<()> {
        if self.modulus != other.modulus {
            return Err(FieldError::ModulusMismatch {
                lhs: self.modulus.clone(),
                rhs: other.modulus.clone(),
            });
        }
        Ok(())
    }

    fn reduced(&self, value: BigUint) -> Self {
        Self {
            value: value % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// Field addition.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.reduced(&self.value + &rhs.value))
    }

    /// Field subtraction.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        // Lift the minuend by the modulus so the difference stays unsigned.
        Ok(self.reduced(&self.value + &self.modulus - &rhs.value))
    }

    /// Field multiplication.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.reduced(&self.value * &rhs.value))
    }

    /// Field division via the Fermat inverse `rhs^(modulus − 2)`.
    ///
    /// A zero divisor is not rejected: `0^(modulus − 2) = 0`, so dividing by
    /// the zero element yields zero. Callers that need a division error must
    /// test the divisor themselves.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        let inverse = rhs.value.modpow(&(&self.modulus - 2u32), &self.modulus);
        Ok(self.reduced(&self.value * inverse))
    }

    /// Exponentiation by an arbitrary, possibly negative, integer.
    ///
    /// The exponent is reduced modulo `modulus − 1` before exponentiating,
    /// which maps negative exponents onto their Fermat equivalents:
    /// `a^(p−1) ≡ 1`, so `a^e ≡ a^(e mod (p−1))`.
    pub fn pow(&self, exponent: &BigInt) -> Self {
        let phi = BigInt::from(&self.modulus - 1u32);
        let mut exponent = exponent % &phi;
        if exponent.sign() == Sign::Minus {
            exponent += &phi;
        }
        Self {
            value: self.value.modpow(exponent.magnitude(), &self.modulus),
            modulus: self.modulus.clone(),
        }
    }

    /// Multiplication by an integer scalar.
    ///
    /// The result is normalized into `[0, modulus)` even when `k` is
    /// negative.
    pub fn scalar_mul(&self, k: &BigInt) -> Self {
        let modulus = BigInt::from(self.modulus.clone());
        let mut value = k * BigInt::from(self.value.clone()) % &modulus;
        if value.sign() == Sign::Minus {
            value += &modulus;
        }
        Self {
            value: value.magnitude().clone(),
            modulus: self.modulus.clone(),
        }
    }
}
