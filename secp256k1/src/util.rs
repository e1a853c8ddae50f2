//! Byte-order helpers shared by the codecs and the signing path.

use num_bigint::BigUint;

/// Fixed-width 32-byte big-endian encoding of a 256-bit integer.
///
/// # Panics
///
/// Panics when `value` does not fit in 32 bytes.
pub fn be_bytes_32(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Interprets bytes as a little-endian integer.
pub fn little_endian_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Encodes an integer as `length` little-endian bytes.
///
/// # Panics
///
/// Panics when `value` does not fit in `length` bytes.
pub fn int_to_little_endian(value: &BigUint, length: usize) -> Vec<u8> {
    let mut bytes = value.to_bytes_le();
    assert!(
        bytes.len() <= length || value.bits() == 0,
        "{value} does not fit in {length} bytes"
    );
    bytes.resize(length, 0);
    bytes
}
