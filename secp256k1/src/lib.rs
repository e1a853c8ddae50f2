//! secp256k1 elliptic curve, built from first principles.
//!
//! The curve `y² = x³ + 7` over the prime field of `p = 2²⁵⁶ − 2³² − 977`,
//! specified in Certicom's SEC 2, together with:
//!
//! - ECDSA signing and verification, with deterministic RFC 6979 nonces
//! - SEC1 point encoding (compressed and uncompressed)
//! - DER signature encoding
//! - Base58Check string encoding
//!
//! The SHA-256, HMAC and RIPEMD-160 primitives come from the RustCrypto
//! `sha2`, `hmac` and `ripemd` crates; everything else is computed here on
//! top of the generic `primefield` and `weierstrass` layers.
//!
//! This is a reference-style implementation: arithmetic is variable-time by
//! design and no attempt is made to resist timing side channels.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod base58;
mod ecdsa;
mod error;
pub mod field;
mod point;
mod signature;
pub mod util;

pub use crate::{
    ecdsa::{InvalidSecretKey, PrivateKey},
    error::{Error, FormatError},
    point::Point,
    signature::Signature,
};

use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use primefield::FieldElement;
use weierstrass::Curve;

/// `a` coefficient of the curve equation.
pub const CURVE_A: u32 = 0;

/// `b` coefficient of the curve equation.
pub const CURVE_B: u32 = 7;

/// Field modulus `p = 2²⁵⁶ − 2³² − 977`.
pub static FIELD_MODULUS: Lazy<BigUint> =
    Lazy::new(|| (BigUint::one() << 256u32) - (BigUint::one() << 32u32) - 977u32);

/// Order `n` of the cyclic group generated by [`GENERATOR`].
pub static CURVE_ORDER: Lazy<BigUint> = Lazy::new(|| {
    BigUint::from_bytes_be(&hex!(
        "FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141"
    ))
});

/// The curve `y² = x³ + 7` over F_p.
pub(crate) static CURVE: Lazy<Curve> = Lazy::new(|| {
    Curve::new(
        FieldElement::new_unchecked(BigUint::from(CURVE_A), FIELD_MODULUS.clone()),
        FieldElement::new_unchecked(BigUint::from(CURVE_B), FIELD_MODULUS.clone()),
    )
});

/// Generator point `G`.
///
/// ```text
/// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
/// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
/// ```
pub static GENERATOR: Lazy<Point> = Lazy::new(|| {
    let x = FieldElement::new_unchecked(
        BigUint::from_bytes_be(&hex!(
            "79BE667E F9DCBBAC 55A06295 CE870B07 029BFCDB 2DCE28D9 59F2815B 16F81798"
        )),
        FIELD_MODULUS.clone(),
    );
    let y = FieldElement::new_unchecked(
        BigUint::from_bytes_be(&hex!(
            "483ADA77 26A3C465 5DA4FBFC 0E1108A8 FD17B448 A6855419 9C47D08F FB10D4B8"
        )),
        FIELD_MODULUS.clone(),
    );
    Point::from_affine_unchecked(x, y)
});
