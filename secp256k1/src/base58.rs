//! Base58Check encoding and the double-hash helpers behind it.

use num_bigint::BigUint;
use num_traits::Zero;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// The Base58 alphabet: base 62 minus the visually ambiguous `0`, `O`, `I`
/// and `l`.
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// `RIPEMD160(SHA256(data))`, the 20-byte hash used for addresses.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// `SHA256(SHA256(data))`, the 32-byte double hash.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// Encodes bytes in Base58.
///
/// Leading zero bytes would vanish in the integer conversion, so each one
/// becomes a literal `'1'` (the zero digit) up front; the remainder is
/// treated as one big-endian integer and written out digit by digit.
pub fn encode_base58(data: &[u8]) -> String {
    let leading_zeros = data.iter().take_while(|&&byte| byte == 0).count();
    let number = BigUint::from_bytes_be(data);

    let mut out = vec![b'1'; leading_zeros];
    if !number.is_zero() {
        out.extend(
            number
                .to_radix_be(58)
                .into_iter()
                .map(|digit| BASE58_ALPHABET[digit as usize]),
        );
    }
    String::from_utf8(out).expect("the alphabet is ASCII")
}

/// First 4 bytes of [`hash256`] — the Base58Check integrity checksum.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let digest = hash256(data);
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Appends the checksum to the payload and encodes the whole in Base58.
pub fn encode_base58check(data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + 4);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum(data));
    encode_base58(&payload)
}
