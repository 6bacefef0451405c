use super::{Curve, CurveKind, MAX_SAMPLING_ATTEMPTS};
use crate::error::{Result, TreeEcdhError};
use p521::elliptic_curve::bigint::U576;
use p521::elliptic_curve::group::{Curve as _, Group};
use p521::elliptic_curve::ops::Reduce;
use p521::elliptic_curve::point::AffineCoordinates;
use p521::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p521::elliptic_curve::{Field, PrimeField};
use p521::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar};
use rand::{CryptoRng, RngCore};

/// NIST P-521. Points travel as SEC1 uncompressed encodings (`0x04 || x || y`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct P521;

impl P521 {
    fn decode(point: &EncodedPoint) -> Result<AffinePoint> {
        if point.is_identity() {
            return Err(TreeEcdhError::InvalidPublicKey(Self::NAME));
        }
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(point))
            .ok_or(TreeEcdhError::InvalidPublicKey(Self::NAME))
    }
}

impl Curve for P521 {
    type Scalar = Scalar;
    type Point = EncodedPoint;

    const NAME: &'static str = "p521";
    const KIND: CurveKind = CurveKind::P521;

    fn base_point() -> EncodedPoint {
        ProjectivePoint::generator().to_affine().to_encoded_point(false)
    }

    fn scalar_multiply(scalar: &Scalar, point: &EncodedPoint) -> Result<EncodedPoint> {
        let affine = Self::decode(point)?;
        let product = ProjectivePoint::from(affine) * scalar;
        if bool::from(product.is_identity()) {
            return Err(TreeEcdhError::PointAtInfinity(Self::NAME));
        }
        Ok(product.to_affine().to_encoded_point(false))
    }

    fn is_on_curve(point: &EncodedPoint) -> bool {
        Self::decode(point).is_ok()
    }

    fn x_coordinate(point: &EncodedPoint) -> Result<Scalar> {
        let affine = Self::decode(point)?;
        // x lives in the base field; p < 2n, so the reduction subtracts n at most once.
        Ok(<Scalar as Reduce<U576>>::reduce_bytes(&affine.x()))
    }

    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
        let mut bytes = FieldBytes::default();
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes)?;
            // The order is a 521-bit number: keep one bit of the leading big-endian byte.
            bytes[0] &= 0x01;
            if let Some(scalar) = Option::<Scalar>::from(Scalar::from_repr(bytes)) {
                return Ok(scalar);
            }
        }
        Err(TreeEcdhError::RandomnessFailure(format!(
            "no {} scalar below the curve order after {MAX_SAMPLING_ATTEMPTS} draws",
            Self::NAME
        )))
    }

    fn is_zero(scalar: &Scalar) -> bool {
        bool::from(scalar.is_zero())
    }

    fn scalar_to_bytes(scalar: &Scalar) -> Vec<u8> {
        scalar.to_repr().to_vec()
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Option<Scalar> {
        if bytes.len() != FieldBytes::default().len() {
            return None;
        }
        Scalar::from_repr(FieldBytes::clone_from_slice(bytes)).into()
    }

    fn point_to_bytes(point: &EncodedPoint) -> Vec<u8> {
        point.as_bytes().to_vec()
    }

    fn point_from_bytes(bytes: &[u8]) -> Option<EncodedPoint> {
        EncodedPoint::from_bytes(bytes).ok()
    }
}
