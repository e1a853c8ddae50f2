//! ECDSA signatures and the DER codec.

use crate::{error::FormatError, util};
use core::fmt;
use num_bigint::BigUint;

/// DER tag for the two-integer signature sequence.
const DER_SEQUENCE: u8 = 0x30;
/// DER tag for an INTEGER.
const DER_INTEGER: u8 = 0x02;

/// An ECDSA signature: the pair `(r, s)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Creates a signature from its two components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Encodes as a DER sequence of two integers.
    ///
    /// Each component becomes its minimal big-endian byte string, with a
    /// single `0x00` prepended when the leading byte has its high bit set
    /// (DER integers are signed, `r` and `s` are non-negative).
    pub fn to_der(&self) -> Vec<u8> {
        let r = der_integer(&self.r);
        let s = der_integer(&self.s);
        let mut out = Vec::with_capacity(2 + r.len() + s.len());
        out.push(DER_SEQUENCE);
        out.push((r.len() + s.len()) as u8);
        out.extend_from_slice(&r);
        out.extend_from_slice(&s);
        out
    }

    /// Parses a DER-encoded signature.
    ///
    /// The outer length byte must cover the rest of the input exactly, both
    /// integers must carry the 0x02 marker, and no bytes may remain after
    /// `s`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, FormatError> {
        let mut reader = Reader::new(bytes);
        let prefix = reader.byte()?;
        if prefix != DER_SEQUENCE {
            return Err(FormatError::InvalidDerPrefix(prefix));
        }
        let length = reader.byte()? as usize;
        if length != reader.remaining() {
            return Err(FormatError::DerLengthMismatch);
        }
        let r = read_der_integer(&mut reader)?;
        let s = read_der_integer(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(FormatError::DerTrailingBytes);
        }
        Ok(Self::new(r, s))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(r={:x}, s={:x})", self.r, self.s)
    }
}

/// Minimal-length DER INTEGER encoding of a 256-bit value.
fn der_integer(value: &BigUint) -> Vec<u8> {
    let fixed = util::be_bytes_32(value);
    let start = fixed.iter().position(|&b| b != 0).unwrap_or(fixed.len());
    let mut digits = fixed[start..].to_vec();
    if digits.first().is_some_and(|b| b & 0x80 != 0) {
        digits.insert(0, 0x00);
    }
    let mut out = Vec::with_capacity(2 + digits.len());
    out.push(DER_INTEGER);
    out.push(digits.len() as u8);
    out.extend_from_slice(&digits);
    out
}

fn read_der_integer(reader: &mut Reader<'_>) -> Result<BigUint, FormatError> {
    let marker = reader.byte()?;
    if marker != DER_INTEGER {
        return Err(FormatError::InvalidDerMarker(marker));
    }
    let length = reader.byte()? as usize;
    Ok(BigUint::from_bytes_be(reader.take(length)?))
}

/// Byte cursor over the DER input.
struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn remaining(&self) -> usize {
        self.bytes.len()
    }

    fn byte(&mut self) -> Result<u8, FormatError> {
        let (&first, rest) = self.bytes.split_first().ok_or(FormatError::DerTruncated)?;
        self.bytes = rest;
        Ok(first)
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], FormatError> {
        if count > self.bytes.len() {
            return Err(FormatError::DerTruncated);
        }
        let (taken, rest) = self.bytes.split_at(count);
        self.bytes = rest;
        Ok(taken)
    }
}
