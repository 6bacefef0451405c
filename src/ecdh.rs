use crate::curve::Curve;
use crate::error::Result;

/// Derives the pairwise ECDH secret: the x-coordinate of `private_key · peer_public_key`.
///
/// For keypairs `(a, A = a·G)` and `(b, B = b·G)`, `derive_shared(a, B) == derive_shared(b, A)`
/// since both sides compute the x-coordinate of `(a·b)·G`.
///
/// Errors from the curve provider (an off-curve peer key, a product at infinity) are returned
/// unchanged.
pub fn derive_shared<C: Curve>(
    private_key: &C::Scalar,
    peer_public_key: &C::Point,
) -> Result<C::Scalar> {
    let shared_point = C::scalar_multiply(private_key, peer_public_key)?;
    C::x_coordinate(&shared_point)
}
