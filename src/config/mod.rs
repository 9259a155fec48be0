//! Project configuration (stylescan.toml)
//!
//! Typed schema, load-time validation, and source provenance for the
//! declarative configuration consumed by both pipeline stages.

mod schema;
mod source;

pub use schema::{ConfigError, StyleConfig, ThemeOverrides, ThemeSection};
pub use source::ConfigSource;
