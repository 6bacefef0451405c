use super::{Curve, CurveKind, MAX_SAMPLING_ATTEMPTS};
use crate::error::{Result, TreeEcdhError};
use curve25519_dalek::constants::X25519_BASEPOINT;
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::traits::IsIdentity;
use curve25519_dalek::Scalar;
use rand::{CryptoRng, RngCore};

/// Curve25519 in Montgomery form. A point is its 32-byte u-coordinate, and the "x-coordinate" of
/// a shared point is that u-coordinate read as a little-endian integer modulo the group order.
///
/// Scalars are used unclamped, so `a · (b · G) == b · (a · G)` holds exactly for all scalars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Curve25519;

impl Curve for Curve25519 {
    type Scalar = Scalar;
    type Point = MontgomeryPoint;

    const NAME: &'static str = "curve25519";
    const KIND: CurveKind = CurveKind::Curve25519;

    fn base_point() -> MontgomeryPoint {
        X25519_BASEPOINT
    }

    fn scalar_multiply(scalar: &Scalar, point: &MontgomeryPoint) -> Result<MontgomeryPoint> {
        if !Self::is_on_curve(point) {
            return Err(TreeEcdhError::InvalidPublicKey(Self::NAME));
        }
        let product = point * scalar;
        if product.to_bytes() == [0u8; 32] {
            return Err(TreeEcdhError::PointAtInfinity(Self::NAME));
        }
        Ok(product)
    }

    /// Accepts only points in the prime-order subgroup, excluding the identity. Points on the
    /// quadratic twist fail the Edwards conversion.
    fn is_on_curve(point: &MontgomeryPoint) -> bool {
        point
            .to_edwards(0)
            .is_some_and(|edwards| edwards.is_torsion_free() && !edwards.is_identity())
    }

    fn x_coordinate(point: &MontgomeryPoint) -> Result<Scalar> {
        if !Self::is_on_curve(point) {
            return Err(TreeEcdhError::InvalidPublicKey(Self::NAME));
        }
        Ok(Scalar::from_bytes_mod_order(point.to_bytes()))
    }

    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
        let mut bytes = [0u8; 32];
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes)?;
            // The order is just above 2^252; draw 253 bits and reject the overflow.
            bytes[31] &= 0x1f;
            if let Some(scalar) = Option::<Scalar>::from(Scalar::from_canonical_bytes(bytes)) {
                return Ok(scalar);
            }
        }
        Err(TreeEcdhError::RandomnessFailure(format!(
            "no {} scalar below the curve order after {MAX_SAMPLING_ATTEMPTS} draws",
            Self::NAME
        )))
    }

    fn is_zero(scalar: &Scalar) -> bool {
        *scalar == Scalar::ZERO
    }

    fn scalar_to_bytes(scalar: &Scalar) -> Vec<u8> {
        scalar.to_bytes().to_vec()
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Option<Scalar> {
        let bytes: [u8; 32] = bytes.try_into().ok()?;
        Scalar::from_canonical_bytes(bytes).into()
    }

    fn point_to_bytes(point: &MontgomeryPoint) -> Vec<u8> {
        point.to_bytes().to_vec()
    }

    fn point_from_bytes(bytes: &[u8]) -> Option<MontgomeryPoint> {
        let bytes: [u8; 32] = bytes.try_into().ok()?;
        Some(MontgomeryPoint(bytes))
    }
}
