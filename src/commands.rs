//! The `tree-ecdh` subcommands, driven through participant files.
//!
//! Each function picks the curve backend at runtime from a [`CurveKind`] (or from the file it
//! loads) and returns what the binary prints: hex encoded secrets or a file summary.

use crate::curve::{Curve, Curve25519, CurveKind, P521};
use crate::ecdh::derive_shared;
use crate::error::Result;
use crate::tree::{reduce_tree, reduction_depth, ParticipantNode};
use crate::types::{decode_public_key, decode_scalar, ParticipantFile};
use log::debug;
use rand::rngs::OsRng;
use std::fmt;
use std::path::Path;

/// Generates `count` participants on `curve` and saves them to `path`.
///
/// # Returns
/// - The saved file, so callers can report or reuse the public keys.
pub fn generate_participants(
    count: usize,
    curve: CurveKind,
    path: &Path,
) -> Result<ParticipantFile> {
    let file = match curve {
        CurveKind::P521 => generate_file::<P521>(count)?,
        CurveKind::Curve25519 => generate_file::<Curve25519>(count)?,
    };
    file.save(path)?;
    debug!("Saved {count} {curve} participants to {}", path.display());
    Ok(file)
}

/// Loads a participant file and reduces it to the hex encoded group secret.
///
/// # Errors
/// - `EmptyParticipantList` if the file holds no participants.
/// - Any key validation error from [`ParticipantFile::to_nodes`].
pub fn reduce_participant_file(path: &Path) -> Result<String> {
    let file = ParticipantFile::load(path)?;
    debug!(
        "Loaded {} {} participants from {}",
        file.participants.len(),
        file.curve,
        path.display()
    );
    match file.curve {
        CurveKind::P521 => reduce_file::<P521>(&file),
        CurveKind::Curve25519 => reduce_file::<Curve25519>(&file),
    }
}

/// Derives the pairwise secret of a hex private key and a hex peer public key, hex encoded.
pub fn shared_hex(curve: CurveKind, private: &str, peer: &str) -> Result<String> {
    match curve {
        CurveKind::P521 => shared::<P521>(private, peer),
        CurveKind::Curve25519 => shared::<Curve25519>(private, peer),
    }
}

/// What `inspect` reports about a participant file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    pub curve: CurveKind,
    pub participants: usize,
    pub generations: usize,
    pub public_keys: Vec<String>,
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Curve:        {}", self.curve)?;
        writeln!(f, "Participants: {}", self.participants)?;
        write!(f, "Generations:  {}", self.generations)?;
        for (index, public_key) in self.public_keys.iter().enumerate() {
            write!(f, "\n  [{index}] {public_key}")?;
        }
        Ok(())
    }
}

/// Summarizes a participant file without decoding its keys.
pub fn inspect_participant_file(path: &Path) -> Result<FileSummary> {
    let file = ParticipantFile::load(path)?;
    let participants = file.participants.len();
    Ok(FileSummary {
        curve: file.curve,
        participants,
        generations: reduction_depth(participants),
        public_keys: file.participants.into_iter().map(|record| record.public_key).collect(),
    })
}

fn generate_file<C: Curve>(count: usize) -> Result<ParticipantFile> {
    let nodes = (0..count)
        .map(|_| ParticipantNode::<C>::generate(&mut OsRng))
        .collect::<Result<Vec<_>>>()?;
    Ok(ParticipantFile::from_nodes(&nodes))
}

fn reduce_file<C: Curve>(file: &ParticipantFile) -> Result<String> {
    let nodes = file.to_nodes::<C>()?;
    let secret = reduce_tree(&nodes)?;
    Ok(hex::encode(C::scalar_to_bytes(&secret)))
}

fn shared<C: Curve>(private: &str, peer: &str) -> Result<String> {
    let private_key = decode_scalar::<C>(private)?;
    let peer_public_key = decode_public_key::<C>(peer)?;
    let secret = derive_shared::<C>(&private_key, &peer_public_key)?;
    Ok(hex::encode(C::scalar_to_bytes(&secret)))
}
