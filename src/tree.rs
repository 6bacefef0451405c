//! Tree reduction of a participant list into one group secret.
//!
//! Each generation pairs adjacent nodes `(0, 1), (2, 3), …`. Every pair is replaced by a node
//! whose private key is the pair's ECDH secret and whose public key is that secret times G. On an
//! odd-length generation the last node is carried into the next generation unchanged, after all
//! the paired results. Generations are built until a single node remains; its private key is the
//! group secret.

use crate::curve::Curve;
use crate::ecdh::derive_shared;
use crate::error::{Result, TreeEcdhError};
use crate::keygen::generate_keypair_with_rng;
use log::{debug, trace, warn};
use rand::{CryptoRng, RngCore};
use std::fmt;

/// A (private scalar, public point) pair taking part in a reduction.
///
/// For freshly generated keys `public_key == private_key · G`. Nodes built by [`reduce_tree`] hold
/// a derived secret and its own public point.
pub struct ParticipantNode<C: Curve> {
    pub private_key: C::Scalar,
    pub public_key: C::Point,
}

impl<C: Curve> ParticipantNode<C> {
    pub fn new(private_key: C::Scalar, public_key: C::Point) -> Self {
        Self { private_key, public_key }
    }

    pub fn from_keypair((private_key, public_key): (C::Scalar, C::Point)) -> Self {
        Self::new(private_key, public_key)
    }

    /// Generates a fresh participant from `rng`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        generate_keypair_with_rng::<C, R>(rng).map(Self::from_keypair)
    }

    /// One pairwise reduction step: `self` is the left node, `right` the right one.
    pub fn combine(&self, right: &Self) -> Result<Self> {
        let secret = derive_shared::<C>(&self.private_key, &right.public_key)?;
        let public_key = C::scalar_multiply(&secret, &C::base_point())?;
        Ok(Self::new(secret, public_key))
    }
}

impl<C: Curve> Clone for ParticipantNode<C> {
    fn clone(&self) -> Self {
        Self::new(self.private_key.clone(), self.public_key.clone())
    }
}

impl<C: Curve> PartialEq for ParticipantNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.private_key == other.private_key && self.public_key == other.public_key
    }
}

impl<C: Curve> fmt::Debug for ParticipantNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticipantNode")
            .field("curve", &C::NAME)
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Folds `nodes` into the group secret.
///
/// The result depends on node order: pairing is positional. It is deterministic for a fixed list.
///
/// A single node is returned as is. That is the terminating case of the reduction; for a protocol
/// run with one real participant it is not an agreement with anybody, so callers should not treat
/// it as one.
///
/// # Errors
/// - `EmptyParticipantList` if `nodes` is empty.
/// - Any curve error raised while combining a pair.
pub fn reduce_tree<C: Curve>(nodes: &[ParticipantNode<C>]) -> Result<C::Scalar> {
    let mut generation = match nodes {
        [] => return Err(TreeEcdhError::EmptyParticipantList),
        [only] => {
            warn!(
                "Reducing a single {} participant: its own key is returned as the group secret",
                C::NAME
            );
            return Ok(only.private_key.clone());
        }
        _ => next_generation(nodes)?,
    };

    let mut depth = 1;
    while generation.len() > 1 {
        generation = next_generation(&generation)?;
        depth += 1;
    }
    debug!("Reduced {} {} participants in {depth} generations", nodes.len(), C::NAME);

    generation
        .pop()
        .map(|root| root.private_key)
        .ok_or(TreeEcdhError::EmptyParticipantList)
}

/// Number of generations [`reduce_tree`] builds for `participants` nodes.
pub fn reduction_depth(participants: usize) -> usize {
    let mut remaining = participants;
    let mut depth = 0;
    while remaining > 1 {
        remaining = remaining.div_ceil(2);
        depth += 1;
    }
    depth
}

fn next_generation<C: Curve>(nodes: &[ParticipantNode<C>]) -> Result<Vec<ParticipantNode<C>>> {
    let mut next = Vec::with_capacity(nodes.len().div_ceil(2));
    let mut pairs = nodes.chunks_exact(2);
    for (index, pair) in pairs.by_ref().enumerate() {
        trace!("Combining nodes {} and {}", 2 * index, 2 * index + 1);
        next.push(pair[0].combine(&pair[1])?);
    }
    if let [carried] = pairs.remainder() {
        trace!("Carrying node {} into the next generation", nodes.len() - 1);
        next.push(carried.clone());
    }
    Ok(next)
}
