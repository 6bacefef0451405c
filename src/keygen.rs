//! Generates one participant's ephemeral keypair.
//!
//! # Returns
//! - A private scalar drawn uniformly from `[1, order)` and its public point `private · G`.

use crate::curve::Curve;
use crate::error::{Result, TreeEcdhError};
use log::trace;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Generates a keypair on curve `C` from the operating system's CSPRNG.
pub fn generate_keypair<C: Curve>() -> Result<(C::Scalar, C::Point)> {
    generate_keypair_with_rng::<C, _>(&mut OsRng)
}

/// Generates a keypair on curve `C` from the given randomness source.
///
/// # Errors
/// - `RandomnessFailure` if `rng` cannot supply bytes. The failure is not retried.
/// - `ZeroPrivateKey` if the drawn scalar is zero.
/// - `InvalidPublicKey` if `private · G` fails the on-curve test.
pub fn generate_keypair_with_rng<C: Curve, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(C::Scalar, C::Point)> {
    let private_key = C::random_scalar(rng)?;
    if C::is_zero(&private_key) {
        return Err(TreeEcdhError::ZeroPrivateKey);
    }

    let public_key = C::scalar_multiply(&private_key, &C::base_point())?;
    if !C::is_on_curve(&public_key) {
        return Err(TreeEcdhError::InvalidPublicKey(C::NAME));
    }

    trace!("Generated {} keypair", C::NAME);
    Ok((private_key, public_key))
}
