//! ECDSA private keys, signing and RFC 6979 nonce derivation.

use crate::{signature::Signature, util, Point, CURVE_ORDER};
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// The secret is outside `[1, n − 1]`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("secret key must be in the range [1, n-1]")]
pub struct InvalidSecretKey;

/// An ECDSA private key over secp256k1.
///
/// Holds the secret scalar together with the public point `secret·G`,
/// computed once at construction and reused for the key's lifetime.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    secret: BigUint,
    point: Point,
}

impl PrivateKey {
    /// Creates a key from a secret scalar in `[1, n − 1]`.
    pub fn new(secret: BigUint) -> Result<Self, InvalidSecretKey> {
        if secret.is_zero() || secret >= *CURVE_ORDER {
            return Err(InvalidSecretKey);
        }
        let point = &Point::generator() * &secret;
        Ok(Self { secret, point })
    }

    /// The public point `secret·G`.
    pub fn public_point(&self) -> &Point {
        &self.point
    }

    /// The secret scalar as 64 zero-padded hex characters.
    pub fn to_hex(&self) -> String {
        format!("{:064x}", self.secret)
    }

    /// Signs the 256-bit message hash `z`.
    ///
    /// The nonce comes from [`Self::deterministic_k`], so identical
    /// `(secret, z)` inputs always produce identical signatures. `s` is
    /// normalized into the low half of the order (the BIP 62 low-S rule).
    pub fn sign(&self, z: &BigUint) -> Signature {
        let n = &*CURVE_ORDER;
        let k = self.deterministic_k(z);
        let r_point = &Point::generator() * &k;
        let r = r_point
            .x()
            .expect("k·G is affine for k in [1, n-1]")
            .value()
            .clone();
        let k_inv = k.modpow(&(n - 2u32), n);
        let mut s = (z + &r * &self.secret) * k_inv % n;
        if s > (n >> 1u32) {
            s = n - s;
        }
        Signature::new(r, s)
    }

    /// Derives the signing nonce from `(secret, z)` per RFC 6979 over
    /// HMAC-SHA256.
    ///
    /// Two reference behaviors worth knowing:
    ///
    /// - An over-range hash is brought below `n` by a single subtraction
    ///   rather than a full reduction. That differs from the RFC for
    ///   `z >= 2n`, a value no 256-bit digest can reach.
    /// - The candidate loop has no iteration cap. Nearly every 256-bit HMAC
    ///   output already lands in `[1, n−1]`, so it exits on the first pass
    ///   in practice, but termination rests on the hash behaving as a PRF.
    pub fn deterministic_k(&self, z: &BigUint) -> BigUint {
        let n = &*CURVE_ORDER;
        let mut z = z.clone();
        if z >= *n {
            z -= n;
        }
        let z_bytes = util::be_bytes_32(&z);
        let secret_bytes = util::be_bytes_32(&self.secret);

        let mut k = [0x00u8; 32];
        let mut v = [0x01u8; 32];

        k = hmac_sha256(&k, &[&v, &[0x00], &secret_bytes, &z_bytes]);
        v = hmac_sha256(&k, &[&v]);
        k = hmac_sha256(&k, &[&v, &[0x01], &secret_bytes, &z_bytes]);
        v = hmac_sha256(&k, &[&v]);

        loop {
            v = hmac_sha256(&k, &[&v]);
            let candidate = BigUint::from_bytes_be(&v);
            if !candidate.is_zero() && candidate < *n {
                return candidate;
            }
            k = hmac_sha256(&k, &[&v, &[0x00]]);
            v = hmac_sha256(&k, &[&v]);
        }
    }
}

/// HMAC-SHA256 over the concatenation of `parts`.
fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC-SHA256 takes keys of any length");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}
