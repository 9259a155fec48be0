//! Build input resolution
//!
//! Ties the two pipeline stages together: one content resolve and one
//! theme merge per build invocation, emitted as a schema-versioned
//! artifact carrying the configuration provenance for the downstream
//! generator. Both stages are independent and idempotent; re-running
//! against an unchanged tree produces an identical artifact apart from
//! the timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, ConfigSource, StyleConfig};
use crate::content::{ContentSet, ResolveError};
use crate::theme::{ResolvedTheme, TokenError};

/// Schema version for build_input.json
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "stylescan/build_input@1";

/// Errors for build resolution
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("theme error: {0}")]
    Theme(#[from] TokenError),

    #[error("content resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BuildError {
    /// Exit code for CLI reporting
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Config(_) | BuildError::Theme(_) => 2,
            BuildError::Resolve(_) | BuildError::Io(_) => 3,
            BuildError::Serialization(_) => 4,
        }
    }
}

/// Resolved inputs for one generator invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildInput {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When these inputs were resolved
    pub created_at: DateTime<Utc>,

    /// Configuration provenance
    pub source: ConfigSource,

    /// Files selected for class scanning, in path order
    pub files: Vec<PathBuf>,

    /// The resolved theme
    pub theme: ResolvedTheme,

    /// Reserved configuration surface, passed through verbatim
    pub variants: BTreeMap<String, serde_json::Value>,

    /// Reserved configuration surface, passed through verbatim
    pub plugins: Vec<String>,
}

impl BuildInput {
    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the artifact to a file
    pub fn write_to_file(&self, path: &Path) -> Result<(), BuildError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Resolve everything a generator needs from one loaded config
///
/// Performs one content resolve against `root` and one theme merge, both
/// pure apart from the read-only filesystem walk.
pub fn resolve_build(config: &StyleConfig, root: &Path) -> Result<BuildInput, BuildError> {
    let content = ContentSet::new(&config.content).map_err(ConfigError::from)?;
    let files = content.resolve(root)?;
    let theme = ResolvedTheme::resolve(&config.theme)?;

    Ok(BuildInput {
        schema_version: SCHEMA_VERSION,
        schema_id: SCHEMA_ID.to_string(),
        created_at: Utc::now(),
        source: config.source.clone(),
        files: files.into_iter().collect(),
        theme,
        variants: config.variants.clone(),
        plugins: config.plugins.clone(),
    })
}
