//! Configuration source provenance
//!
//! Records where a configuration was loaded from and the SHA-256 digest of
//! its raw bytes. The provenance is mirrored into every emitted artifact so
//! a generator run can be traced back to the exact configuration it saw.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Provenance of a loaded configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSource {
    /// File path (None when parsed from an in-memory string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of the raw file bytes (None for in-memory strings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl ConfigSource {
    /// Provenance for a file, digesting the given raw bytes
    pub fn from_file(path: &Path, bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self {
            path: Some(path.to_string_lossy().to_string()),
            digest: Some(hex::encode(hasher.finalize())),
        }
    }
}
