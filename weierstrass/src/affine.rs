//! Affine points and the chord-and-tangent group law.

use crate::error::{PointError, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use primefield::FieldElement;

/// Coefficients `(a, b)` of a curve `y² = x³ + a·x + b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
}

impl Curve {
    /// Creates a curve from its two coefficients.
    pub fn new(a: FieldElement, b: FieldElement) -> Self {
        Self { a, b }
    }

    /// The `a` coefficient.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// The `b` coefficient.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Whether `(x, y)` satisfies the curve equation.
    fn contains(&self, x: &FieldElement, y: &FieldElement) -> Result<bool> {
        let lhs = y.mul(y)?;
        let rhs = x.pow(&BigInt::from(3)).add(&self.a.mul(x)?)?.add(&self.b)?;
        Ok(lhs == rhs)
    }
}

/// The position of a point: the group identity, or a finite `(x, y)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Coordinates {
    /// The point at infinity.
    Identity,

    /// A finite point.
    Affine {
        /// x-coordinate.
        x: FieldElement,
        /// y-coordinate.
        y: FieldElement,
    },
}

/// A point on a short Weierstrass curve, in affine coordinates.
///
/// Two finite points are equal when their coordinates and their curves
/// agree; identity points compare equal exactly when their curves do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    curve: Curve,
    coordinates: Coordinates,
}

impl AffinePoint {
    /// Creates a point after verifying that it satisfies the curve equation.
    pub fn new(x: FieldElement, y: FieldElement, curve: Curve) -> Result<Self> {
        if !curve.contains(&x, &y)? {
            return Err(PointError::NotOnCurve);
        }
        Ok(Self {
            curve,
            coordinates: Coordinates::Affine { x, y },
        })
    }

    /// Creates a point without the curve membership check.
    ///
    /// For known-good constants such as standardized generators; the caller
    /// is responsible for the curve equation holding.
    pub fn new_unchecked(x: FieldElement, y: FieldElement, curve: Curve) -> Self {
        Self {
            curve,
            coordinates: Coordinates::Affine { x, y },
        }
    }

    /// The identity (point at infinity) of the given curve's group.
    pub fn identity(curve: Curve) -> Self {
        Self {
            curve,
            coordinates: Coordinates::Identity,
        }
    }

    /// The curve this point lives on.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The point's position.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Whether this is the group identity.
    pub fn is_identity(&self) -> bool {
        matches!(self.coordinates, Coordinates::Identity)
    }

    /// The x-coordinate, unless this is the identity.
    pub fn x(&self) -> Option<&FieldElement> {
        match &self.coordinates {
            Coordinates::Identity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, unless this is the identity.
    pub fn y(&self) -> Option<&FieldElement> {
        match &self.coordinates {
            Coordinates::Identity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    fn affine_result(&self, x: FieldElement, y: FieldElement) -> Self {
        Self {
            curve: self.curve.clone(),
            coordinates: Coordinates::Affine { x, y },
        }
    }

    /// Adds two points with the chord-and-tangent law.
    ///
    /// Fails with [`PointError::CurveMismatch`] when the operands carry
    /// different `(a, b)`. The five cases, in dispatch order: either operand
    /// is the identity; mirror points; the chord through distinct points;
    /// a vertical tangent (`y = 0`); the tangent at a repeated point.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.curve != other.curve {
            return Err(PointError::CurveMismatch);
        }

        let (x1, y1) = match &self.coordinates {
            Coordinates::Identity => return Ok(other.clone()),
            Coordinates::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match &other.coordinates {
            Coordinates::Identity => return Ok(self.clone()),
            Coordinates::Affine { x, y } => (x, y),
        };

        // Mirror points: P + (-P) = ∞.
        if x1 == x2 && y1 != y2 {
            return Ok(Self::identity(self.curve.clone()));
        }

        if x1 != x2 {
            // Chord through two distinct points:
            //   s = (y₂ − y₁) / (x₂ − x₁)
            //   x₃ = s² − x₁ − x₂
            //   y₃ = s·(x₁ − x₃) − y₁
            let slope = y2.sub(y1)?.div(&x2.sub(x1)?)?;
            let x3 = slope.mul(&slope)?.sub(x1)?.sub(x2)?;
            let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
            return Ok(self.affine_result(x3, y3));
        }

        // From here on the operands are the same point.
        if y1.is_zero() {
            // Vertical tangent: the point is its own inverse.
            return Ok(Self::identity(self.curve.clone()));
        }

        // Tangent at P:
        //   s = (3·x₁² + a) / (2·y₁)
        //   x₃ = s² − 2·x₁
        //   y₃ = s·(x₁ − x₃) − y₁
        let two = BigInt::from(2);
        let slope = x1
            .mul(x1)?
            .scalar_mul(&BigInt::from(3))
            .add(self.curve.a())?
            .div(&y1.scalar_mul(&two))?;
        let x3 = slope.mul(&slope)?.sub(&x1.scalar_mul(&two))?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Ok(self.affine_result(x3, y3))
    }

    /// Scalar multiplication by double-and-add over the bits of `k`, least
    /// significant first.
    ///
    /// `k = 0` yields the identity. Negative scalars are not representable
    /// here; callers working in a group of known order reduce first.
    pub fn mul(&self, k: &BigUint) -> Result<Self> {
        let mut coefficient = k.clone();
        let mut current = self.clone();
        let mut result = Self::identity(self.curve.clone());
        while !coefficient.is_zero() {
            if coefficient.bit(0) {
                result = result.add(&current)?;
            }
            current = current.add(&current)?;
            coefficient >>= 1u32;
        }
        Ok(result)
    }
}
