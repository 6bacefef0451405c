use crate::curve::{Curve, CurveKind};
use crate::error::{Result, TreeEcdhError};
use crate::tree::ParticipantNode;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// On-disk form of a participant list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantFile {
    pub curve: CurveKind,
    pub participants: Vec<ParticipantRecord>,
}

/// One participant, keys hex encoded: the canonical scalar bytes and the curve's point encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub private_key: String,
    pub public_key: String,
}

impl ParticipantRecord {
    pub fn from_node<C: Curve>(node: &ParticipantNode<C>) -> Self {
        Self {
            private_key: hex::encode(C::scalar_to_bytes(&node.private_key)),
            public_key: hex::encode(C::point_to_bytes(&node.public_key)),
        }
    }

    /// Decodes the record, rejecting non-canonical or zero scalars, off-curve public keys and
    /// public keys that are not `private_key · G`.
    pub fn to_node<C: Curve>(&self) -> Result<ParticipantNode<C>> {
        let private_key = decode_scalar::<C>(&self.private_key)?;
        let public_key = decode_public_key::<C>(&self.public_key)?;
        if C::scalar_multiply(&private_key, &C::base_point())? != public_key {
            return Err(TreeEcdhError::InvalidPublicKey(C::NAME));
        }
        Ok(ParticipantNode::new(private_key, public_key))
    }
}

impl ParticipantFile {
    pub fn from_nodes<C: Curve>(nodes: &[ParticipantNode<C>]) -> Self {
        Self {
            curve: C::KIND,
            participants: nodes.iter().map(ParticipantRecord::from_node::<C>).collect(),
        }
    }

    /// Decodes every participant for backend `C`, which must match the file's curve.
    pub fn to_nodes<C: Curve>(&self) -> Result<Vec<ParticipantNode<C>>> {
        if self.curve != C::KIND {
            return Err(TreeEcdhError::CurveMismatch {
                expected: C::NAME.to_string(),
                found: self.curve.to_string(),
            });
        }
        self.participants.iter().map(ParticipantRecord::to_node::<C>).collect()
    }

    /// Writes the file as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

pub fn decode_scalar<C: Curve>(hex_str: &str) -> Result<C::Scalar> {
    let bytes = hex::decode(hex_str.trim())?;
    let scalar = C::scalar_from_bytes(&bytes)
        .ok_or_else(|| TreeEcdhError::Encoding(format!("not a canonical {} scalar", C::NAME)))?;
    if C::is_zero(&scalar) {
        return Err(TreeEcdhError::ZeroPrivateKey);
    }
    Ok(scalar)
}

pub fn decode_public_key<C: Curve>(hex_str: &str) -> Result<C::Point> {
    let bytes = hex::decode(hex_str.trim())?;
    let point = C::point_from_bytes(&bytes)
        .ok_or_else(|| TreeEcdhError::Encoding(format!("not a {} point encoding", C::NAME)))?;
    if !C::is_on_curve(&point) {
        return Err(TreeEcdhError::InvalidPublicKey(C::NAME));
    }
    Ok(point)
}
