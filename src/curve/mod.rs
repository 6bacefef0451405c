//! Curve arithmetic providers.
//!
//! The key agreement code never touches field or group arithmetic directly. Everything it needs
//! from an elliptic curve goes through the [`Curve`] trait: the base point, scalar multiplication,
//! the on-curve test, the affine x-coordinate of a point, and uniform scalar sampling.
//!
//! Two backends are provided:
//! - [`P521`], the NIST P-521 curve from the RustCrypto `p521` crate. This is the default.
//! - [`Curve25519`], the Montgomery form of Curve25519 from `curve25519-dalek`.

use crate::error::Result;
use clap::ValueEnum;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

mod curve25519;
mod nist_p521;

pub use curve25519::Curve25519;
pub use nist_p521::P521;

/// Upper bound on rejection-sampling draws in [`Curve::random_scalar`]. Each draw is accepted
/// with probability at least 1/2, so hitting this bound means the source is not random.
pub(crate) const MAX_SAMPLING_ATTEMPTS: usize = 128;

pub trait Curve {
    /// An integer modulo the base-point order.
    type Scalar: Clone + PartialEq + Debug;
    /// A public point in its wire representation. Values of this type are not guaranteed to be on
    /// the curve; use [`Curve::is_on_curve`] before trusting one.
    type Point: Clone + PartialEq + Debug;

    /// Short name used in logs and key files.
    const NAME: &'static str;
    const KIND: CurveKind;

    /// The fixed generator G.
    fn base_point() -> Self::Point;

    /// Computes `scalar · point`.
    ///
    /// # Errors
    /// - `InvalidPublicKey` if `point` fails the on-curve test.
    /// - `PointAtInfinity` if the product is the identity.
    fn scalar_multiply(scalar: &Self::Scalar, point: &Self::Point) -> Result<Self::Point>;

    fn is_on_curve(point: &Self::Point) -> bool;

    /// The affine x-coordinate of `point`, reduced modulo the base-point order.
    fn x_coordinate(point: &Self::Point) -> Result<Self::Scalar>;

    /// Draws a scalar uniformly from `[0, order)`.
    ///
    /// The result may be zero; callers that need a key must check with [`Curve::is_zero`].
    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Scalar>;

    fn is_zero(scalar: &Self::Scalar) -> bool;

    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8>;

    /// Decodes a canonical scalar encoding. Returns `None` for out-of-range values.
    fn scalar_from_bytes(bytes: &[u8]) -> Option<Self::Scalar>;

    fn point_to_bytes(point: &Self::Point) -> Vec<u8>;

    /// Parses a point encoding. Succeeding here says nothing about curve membership.
    fn point_from_bytes(bytes: &[u8]) -> Option<Self::Point>;
}

/// Runtime selector for a [`Curve`] backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// NIST P-521, about 256-bit security
    #[default]
    P521,
    /// Curve25519, about 128-bit security: weaker than P-521, not an equivalent substitute
    Curve25519,
}

impl CurveKind {
    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::P521 => P521::NAME,
            CurveKind::Curve25519 => Curve25519::NAME,
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
