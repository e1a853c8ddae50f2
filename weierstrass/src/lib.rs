//! Short Weierstrass elliptic curve points in affine coordinates.
//!
//! The group law is the textbook chord-and-tangent construction over a prime
//! field: five mutually exclusive cases, dispatched in a fixed order. Curve
//! coefficients travel with every point, so points of different curves can
//! never be combined by accident.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod affine;
mod error;

pub use crate::{
    affine::{AffinePoint, Coordinates, Curve},
    error::{PointError, Result},
};
