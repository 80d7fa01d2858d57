use crate::error::ArtifactError;
use crate::model::Node;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Format revision written with every artifact.
pub const ARTIFACT_VERSION: u32 = 1;

/// A compiled node, ready to be cached and loaded without re-parsing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompiledNode {
    pub version: u32,
    pub node: Node,
}

impl CompiledNode {
    pub fn new(node: Node) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            node,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Saves the compiled node to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path.display(), e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!(
                "Could not write to file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }

    /// Loads a compiled node from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not open file '{}': {}", path.display(), e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!(
                "Could not read from file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a compiled node, rejecting other format revisions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (compiled, _): (Self, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))?;
        if compiled.version != ARTIFACT_VERSION {
            return Err(ArtifactError::Generic(format!(
                "Unsupported artifact version {} (expected {})",
                compiled.version, ARTIFACT_VERSION
            )));
        }
        Ok(compiled)
    }
}
