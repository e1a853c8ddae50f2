//! secp256k1 curve points, scalar multiplication and the SEC1 codec.

use crate::{
    error::{Error, FormatError},
    field,
    signature::Signature,
    util, CURVE, CURVE_ORDER, GENERATOR,
};
use core::ops::{Add, Mul};
use num_bigint::{BigInt, BigUint};
use primefield::FieldElement;
use weierstrass::AffinePoint;

/// SEC1 prefix for a compressed point with an even y-coordinate.
const SEC_EVEN_Y: u8 = 0x02;
/// SEC1 prefix for a compressed point with an odd y-coordinate.
const SEC_ODD_Y: u8 = 0x03;
/// SEC1 prefix for an uncompressed point.
const SEC_UNCOMPRESSED: u8 = 0x04;

/// A point on the secp256k1 curve.
///
/// Wraps the generic [`AffinePoint`] with the curve parameters fixed, so two
/// values of this type always share a curve and the group operations cannot
/// mismatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point(AffinePoint);

impl Point {
    /// Creates a point from integer coordinates, verifying curve membership.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self, Error> {
        let x = field::element(x)?;
        let y = field::element(y)?;
        Ok(Self(AffinePoint::new(x, y, CURVE.clone())?))
    }

    /// Constructor for known-good coordinates, used for the fixed constants.
    pub(crate) fn from_affine_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Self(AffinePoint::new_unchecked(x, y, CURVE.clone()))
    }

    /// The group identity.
    pub fn identity() -> Self {
        Self(AffinePoint::identity(CURVE.clone()))
    }

    /// The generator point `G`.
    pub fn generator() -> Self {
        GENERATOR.clone()
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// The x-coordinate, unless this is the identity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.0.x()
    }

    /// The y-coordinate, unless this is the identity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.0.y()
    }

    /// Verifies an ECDSA signature over the hash `z` against this public
    /// key.
    ///
    /// Computes `R = (z/s)·G + (r/s)·self` and accepts when `R` is affine
    /// with `R.x = r`. A bad signature is an expected outcome, so this
    /// reports `false` rather than erroring.
    pub fn verify(&self, z: &BigUint, signature: &Signature) -> bool {
        let n = &*CURVE_ORDER;
        // Fermat inverse in the order field, not the coordinate field.
        let s_inv = signature.s().modpow(&(n - 2u32), n);
        let u = z * &s_inv % n;
        let v = signature.r() * &s_inv % n;
        let total = &(&Point::generator() * &u) + &(self * &v);
        match total.x() {
            Some(x) => x.value() == signature.r(),
            None => false,
        }
    }

    /// Serializes to SEC1 bytes.
    ///
    /// Uncompressed: `0x04 ‖ X ‖ Y`. Compressed: `0x02 ‖ X` when `y` is
    /// even, `0x03 ‖ X` when odd. Coordinates are fixed-width 32-byte
    /// big-endian.
    pub fn to_sec_bytes(&self, compressed: bool) -> Result<Vec<u8>, FormatError> {
        let (x, y) = match (self.x(), self.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(FormatError::PointAtInfinity),
        };
        let x_bytes = util::be_bytes_32(x.value());
        let mut out;
        if compressed {
            out = Vec::with_capacity(33);
            out.push(if y.is_even() { SEC_EVEN_Y } else { SEC_ODD_Y });
            out.extend_from_slice(&x_bytes);
        } else {
            out = Vec::with_capacity(65);
            out.push(SEC_UNCOMPRESSED);
            out.extend_from_slice(&x_bytes);
            out.extend_from_slice(&util::be_bytes_32(y.value()));
        }
        Ok(out)
    }

    /// Parses a SEC1-encoded point.
    ///
    /// Compressed inputs recover `y` as `sqrt(x³ + 7)`, mirrored to `p − y`
    /// when its parity disagrees with the prefix byte. Either way the
    /// decoded point is validated against the curve equation.
    pub fn from_sec_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (&prefix, rest) = bytes.split_first().ok_or(FormatError::Empty)?;
        match prefix {
            SEC_UNCOMPRESSED => {
                if rest.len() != 64 {
                    return Err(FormatError::SecLength {
                        expected: 65,
                        actual: bytes.len(),
                    }
                    .into());
                }
                let x = BigUint::from_bytes_be(&rest[..32]);
                let y = BigUint::from_bytes_be(&rest[32..]);
                Self::new(x, y)
            }
            SEC_EVEN_Y | SEC_ODD_Y => {
                if rest.len() != 32 {
                    return Err(FormatError::SecLength {
                        expected: 33,
                        actual: bytes.len(),
                    }
                    .into());
                }
                let x = field::element(BigUint::from_bytes_be(rest))?;
                // Right side of y² = x³ + 7.
                let alpha = x.pow(&BigInt::from(3)).add(CURVE.b())?;
                let root = field::sqrt(&alpha);
                let y = if root.is_even() == (prefix == SEC_EVEN_Y) {
                    root
                } else {
                    field::element(&*crate::FIELD_MODULUS - root.value())?
                };
                Ok(Self(AffinePoint::new(x, y, CURVE.clone())?))
            }
            other => Err(FormatError::InvalidSecPrefix(other).into()),
        }
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Point {
        let sum = self
            .0
            .add(&rhs.0)
            .expect("secp256k1 points always share a curve");
        Point(sum)
    }
}

impl Mul<&BigUint> for &Point {
    type Output = Point;

    /// Scalar multiplication. The scalar is reduced modulo the group order
    /// first, since `n·G = ∞`.
    fn mul(self, scalar: &BigUint) -> Point {
        let k = scalar % &*CURVE_ORDER;
        let product = self
            .0
            .mul(&k)
            .expect("secp256k1 points always share a curve");
        Point(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrivateKey;
    use hex_literal::hex;
    use proptest::prelude::*;
    use weierstrass::PointError;

    fn biguint(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    #[test]
    fn group_order_times_generator_is_the_identity() {
        let point = &Point::generator() * &*CURVE_ORDER;
        assert!(point.is_identity());
    }

    #[test]
    fn known_public_points() {
        let cases = [
            (
                BigUint::from(7u32),
                hex!("5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC"),
                hex!("6AEBCA40BA255960A3178D6D861A54DBA813D0B813FDE7B5A5082628087264DA"),
            ),
            (
                BigUint::from(1485u32),
                hex!("C982196A7466FBBBB0E27A940B6AF926C1A74D5AD07128C82824A11B5398AFDA"),
                hex!("7A91F9EAE64438AFB9CE6448A1C133DB2D8FB9254E4546B6F001637D50901F55"),
            ),
            (
                BigUint::from(1u8) << 128u32,
                hex!("8F68B9D2F63B5F339239C1AD981F162EE88C5678723EA3351B7B444C9EC4C0DA"),
                hex!("662A9F2DBA063986DE1D90C2B6BE215DBBEA2CFE95510BFDF23CBF79501FFF82"),
            ),
            (
                (BigUint::from(1u8) << 240u32) + (BigUint::from(1u8) << 31u32),
                hex!("9577FF57C8234558F293DF502CA4F09CBC65A6572C842B39B366F21717945116"),
                hex!("10B49C67FA9365AD7B90DAB070BE339A1DAF9052373EC30FFAE4F72D5E66D053"),
            ),
        ];
        for (secret, x, y) in cases {
            let expected = Point::new(biguint(&x), biguint(&y)).unwrap();
            assert_eq!(&Point::generator() * &secret, expected);
        }
    }

    #[test]
    fn verifies_known_signatures() {
        let point = Point::new(
            biguint(&hex!(
                "887387E452B8EACC4ACFDE10D9AAF7F6D9A0F975AABB10D006E4DA568744D06C"
            )),
            biguint(&hex!(
                "61DE6D95231CD89026E286DF3B6AE4A894A3378E393E93A0F45B666329A0AE34"
            )),
        )
        .unwrap();

        let z = biguint(&hex!(
            "EC208BAA0FC1C19F708A9CA96FDEFF3AC3F230BB4A7BA4AEDE4942AD003C0F60"
        ));
        let r = biguint(&hex!(
            "AC8D1C87E51D0D441BE8B3DD5B05C8795B48875DFFE00B7FFCFAC23010D3A395"
        ));
        let s = biguint(&hex!(
            "068342CEFF8935EDEDD102DD876FFD6BA72D6A427A3EDB13D26EB0781CB423C4"
        ));
        assert!(point.verify(&z, &Signature::new(r, s)));

        let z = biguint(&hex!(
            "7C076FF316692A3D7EB3C3BB0F8B1488CF72E1AFCD929E29307032997A838A3D"
        ));
        let r = biguint(&hex!(
            "00EFF69EF2B1BD93A66ED5219ADD4FB51E11A840F404876325A1E8FFE0529A2C"
        ));
        let s = biguint(&hex!(
            "C7207FEE197D27C618AEA621406F6BF5EF6FCA38681D82B2F06FDDBDCE6FEAB6"
        ));
        assert!(point.verify(&z, &Signature::new(r, s)));
    }

    #[test]
    fn rejects_tampered_signatures() {
        let key = PrivateKey::new(BigUint::from(12345u32)).unwrap();
        let z = biguint(&crate::base58::hash256(b"my message"));
        let sig = key.sign(&z);
        assert!(key.public_point().verify(&z, &sig));

        let other_z = biguint(&crate::base58::hash256(b"another message"));
        assert!(!key.public_point().verify(&other_z, &sig));

        let tampered = Signature::new(sig.r() + 1u32, sig.s().clone());
        assert!(!key.public_point().verify(&z, &tampered));
    }

    #[test]
    fn sec_golden_vectors() {
        let cases = [
            (
                BigUint::from(999u32).pow(3),
                hex!("049d5ca49670cbe4c3bfa84c96a8c87df086c6ea6a24ba6b809c9de234496808d56fa15cc7f3d38cda98dee2419f415b7513dde1301f8643cd9245aea7f3f911f9").to_vec(),
                hex!("039d5ca49670cbe4c3bfa84c96a8c87df086c6ea6a24ba6b809c9de234496808d5").to_vec(),
            ),
            (
                BigUint::from(123u32),
                hex!("04a598a8030da6d86c6bc7f2f5144ea549d28211ea58faa70ebf4c1e665c1fe9b5204b5d6f84822c307e4b4a7140737aec23fc63b65b35f86a10026dbd2d864e6b").to_vec(),
                hex!("03a598a8030da6d86c6bc7f2f5144ea549d28211ea58faa70ebf4c1e665c1fe9b5").to_vec(),
            ),
            (
                BigUint::from(42424242u32),
                hex!("04aee2e7d843f7430097859e2bc603abcc3274ff8169c1a469fee0f20614066f8e21ec53f40efac47ac1c5211b2123527e0e9b57ede790c4da1e72c91fb7da54a3").to_vec(),
                hex!("03aee2e7d843f7430097859e2bc603abcc3274ff8169c1a469fee0f20614066f8e").to_vec(),
            ),
            (
                BigUint::from(5001u32),
                hex!("0457a4f368868a8a6d572991e484e664810ff14c05c0fa023275251151fe0e53d10d6cc87c5bc29b83368e17869e964f2f53d52ea3aa3e5a9efa1fa578123a0c6d").to_vec(),
                hex!("0357a4f368868a8a6d572991e484e664810ff14c05c0fa023275251151fe0e53d1").to_vec(),
            ),
            (
                BigUint::from(2019u32).pow(5),
                hex!("04933ec2d2b111b92737ec12f1c5d20f3233a0ad21cd8b36d0bca7a0cfa5cb870196cbbfdd572f75ace44d0aa59fbab6326cb9f909385dcd066ea27affef5a488c").to_vec(),
                hex!("02933ec2d2b111b92737ec12f1c5d20f3233a0ad21cd8b36d0bca7a0cfa5cb8701").to_vec(),
            ),
            (
                BigUint::from(0xDEADBEEF54321u64),
                hex!("0496be5b1292f6c856b3c5654e886fc13511462059089cdf9c479623bfcbe7769032555d1b027c25c2828ba96a176d78419cd1236f71558f6187aec09611325eb6").to_vec(),
                hex!("0296be5b1292f6c856b3c5654e886fc13511462059089cdf9c479623bfcbe77690").to_vec(),
            ),
        ];

        for (coefficient, uncompressed, compressed) in cases {
            let point = &Point::generator() * &coefficient;
            assert_eq!(point.to_sec_bytes(false).unwrap(), uncompressed);
            assert_eq!(point.to_sec_bytes(true).unwrap(), compressed);
            assert_eq!(Point::from_sec_bytes(&uncompressed).unwrap(), point);
            assert_eq!(Point::from_sec_bytes(&compressed).unwrap(), point);
        }
    }

    #[test]
    fn sec_decoding_rejects_malformed_input() {
        assert!(matches!(
            Point::from_sec_bytes(&[]),
            Err(Error::Format(FormatError::Empty))
        ));
        assert!(matches!(
            Point::from_sec_bytes(&[0x05; 33]),
            Err(Error::Format(FormatError::InvalidSecPrefix(0x05)))
        ));
        let sec = Point::generator().to_sec_bytes(true).unwrap();
        assert!(matches!(
            Point::from_sec_bytes(&sec[..32]),
            Err(Error::Format(FormatError::SecLength { .. }))
        ));
    }

    #[test]
    fn sec_decoding_rejects_out_of_field_coordinates() {
        let mut bytes = vec![SEC_EVEN_Y];
        bytes.extend_from_slice(&util::be_bytes_32(&crate::FIELD_MODULUS));
        assert!(matches!(Point::from_sec_bytes(&bytes), Err(Error::Field(_))));
    }

    #[test]
    fn uncompressed_decoding_validates_curve_membership() {
        let mut sec = Point::generator().to_sec_bytes(false).unwrap();
        sec[64] ^= 1;
        assert!(matches!(
            Point::from_sec_bytes(&sec),
            Err(Error::Point(PointError::NotOnCurve))
        ));
    }

    #[test]
    fn the_identity_has_no_sec_encoding() {
        let identity = Point::identity();
        assert_eq!(
            identity.to_sec_bytes(true).unwrap_err(),
            FormatError::PointAtInfinity
        );
        assert_eq!(
            identity.to_sec_bytes(false).unwrap_err(),
            FormatError::PointAtInfinity
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn sec_round_trip(secret in 1u64..) {
            let point = &Point::generator() * &BigUint::from(secret);
            for compressed in [false, true] {
                let bytes = point.to_sec_bytes(compressed).unwrap();
                prop_assert_eq!(Point::from_sec_bytes(&bytes).unwrap(), point.clone());
            }
        }
    }
}
