//! stylescan - content scanning and theme resolution
//!
//! This crate implements the configuration front half of a utility-class
//! CSS generation pipeline: it expands the configured content globs into
//! the concrete set of files the generator must scan for class usage, and
//! merges the declared theme with the implicit default theme into one
//! resolved token set.

pub mod build;
pub mod config;
pub mod content;
pub mod theme;

pub use build::{resolve_build, BuildError, BuildInput};
pub use config::{ConfigError, ConfigSource, StyleConfig};
pub use content::{ContentPattern, ContentSet, PatternError, ResolveError};
pub use theme::{DefaultTheme, FontStack, ResolvedTheme, ScreenWidth, TokenError};
