use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeEcdhError>;

#[derive(Debug, Error)]
pub enum TreeEcdhError {
    /// `reduce_tree` was handed no participants.
    #[error("cannot reduce an empty participant list")]
    EmptyParticipantList,
    #[error("generated private key is zero")]
    ZeroPrivateKey,
    #[error("public key is not a valid point on {0}")]
    InvalidPublicKey(&'static str),
    #[error("secure randomness source failed: {0}")]
    RandomnessFailure(String),
    /// Scalar multiplication landed on the identity, which has no affine x-coordinate.
    #[error("scalar multiplication on {0} produced the point at infinity")]
    PointAtInfinity(&'static str),
    #[error("invalid encoding: {0}")]
    Encoding(String),
    #[error("key file is for curve {found}, expected {expected}")]
    CurveMismatch { expected: String, found: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rand::Error> for TreeEcdhError {
    fn from(err: rand::Error) -> Self {
        TreeEcdhError::RandomnessFailure(err.to_string())
    }
}

impl From<hex::FromHexError> for TreeEcdhError {
    fn from(err: hex::FromHexError) -> Self {
        TreeEcdhError::Encoding(err.to_string())
    }
}
