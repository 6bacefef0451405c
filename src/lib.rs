//! Tree-structured ECDH group secret agreement.
//!
//! Participants each hold an ephemeral keypair from [`generate_keypair`]. [`reduce_tree`] folds an
//! ordered list of them into one shared scalar by pairing neighbours, running ECDH per pair and
//! recursing on the results. Curve arithmetic is pluggable through [`Curve`]; [`P521`] is the
//! default backend.
//!
//! ```no_run
//! use tree_ecdh::{generate_keypair, reduce_tree, ParticipantNode, P521};
//!
//! # fn main() -> tree_ecdh::Result<()> {
//! let nodes = (0..5)
//!     .map(|_| generate_keypair::<P521>().map(ParticipantNode::<P521>::from_keypair))
//!     .collect::<tree_ecdh::Result<Vec<_>>>()?;
//! let group_secret = reduce_tree(&nodes)?;
//! # let _ = group_secret;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod curve;
pub mod ecdh;
pub mod error;
pub mod keygen;
pub mod tree;
pub mod types;

pub use commands::{
    generate_participants, inspect_participant_file, reduce_participant_file, shared_hex,
    FileSummary,
};
pub use curve::{Curve, Curve25519, CurveKind, P521};
pub use ecdh::derive_shared;
pub use error::{Result, TreeEcdhError};
pub use keygen::{generate_keypair, generate_keypair_with_rng};
pub use tree::{reduce_tree, reduction_depth, ParticipantNode};
pub use types::{ParticipantFile, ParticipantRecord};
