//! Typed configuration schema (stylescan.toml)
//!
//! Defines the configuration format and parsing for a project's style
//! generation scope: content globs, declared theme axes, and the reserved
//! `variants`/`plugins` surfaces. Validation happens at load time so shape
//! errors surface before any generation work starts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::content::{ContentPattern, PatternError};
use crate::theme::{FontStack, ScreenWidth, TokenError};

use super::source::ConfigSource;

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Content pattern error: {0}")]
    PatternError(#[from] PatternError),

    #[error("Theme value error: {0}")]
    ThemeError(#[from] TokenError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Declared base theme axes
///
/// A base declaration is exhaustive for its axis: it replaces the implicit
/// default axis wholesale. Axes under `extend` are additive instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSection {
    /// Font family stacks by name (e.g. sans, mono)
    #[serde(default, alias = "fontFamily")]
    pub font_family: Option<BTreeMap<String, Vec<String>>>,

    /// Breakpoint widths by name (e.g. sm, 3xl)
    #[serde(default)]
    pub screens: Option<BTreeMap<String, String>>,

    /// Overlay axes added on top of the resolved axis rather than
    /// replacing it
    #[serde(default)]
    pub extend: Option<ThemeOverrides>,
}

/// Overlay theme axes under `[theme.extend]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeOverrides {
    /// Additional font family stacks
    #[serde(default, alias = "fontFamily")]
    pub font_family: Option<BTreeMap<String, Vec<String>>>,

    /// Additional breakpoint widths
    #[serde(default)]
    pub screens: Option<BTreeMap<String, String>>,
}

/// Project configuration from stylescan.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Glob patterns selecting the files scanned for class usage
    #[serde(default)]
    pub content: Vec<String>,

    /// Declared theme (empty = all defaults)
    #[serde(default)]
    pub theme: ThemeSection,

    /// Reserved surface; parsed and preserved, no behavior
    #[serde(default)]
    pub variants: BTreeMap<String, serde_json::Value>,

    /// Reserved surface; parsed and preserved, no behavior
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Provenance of the loaded file (not part of the TOML surface)
    #[serde(skip)]
    pub source: ConfigSource,
}

impl StyleConfig {
    /// Load and parse config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut config = Self::from_str(&contents)?;
        config.source = ConfigSource::from_file(path, contents.as_bytes());
        Ok(config)
    }

    /// Parse config from a TOML string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: StyleConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Compiles every content pattern and checks every declared theme
    /// token, so malformed declarations fail here rather than
    /// mid-generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.is_empty() {
            return Err(ConfigError::ValidationError(
                "At least one content pattern must be declared in 'content'".to_string(),
            ));
        }

        for pattern in &self.content {
            ContentPattern::parse(pattern)?;
        }

        self.theme.validate()?;

        Ok(())
    }
}

impl ThemeSection {
    /// Check every declared token against its axis shape rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_axes(self.font_family.as_ref(), self.screens.as_ref())?;
        if let Some(extend) = &self.extend {
            validate_axes(extend.font_family.as_ref(), extend.screens.as_ref())?;
        }
        Ok(())
    }
}

fn validate_axes(
    font_family: Option<&BTreeMap<String, Vec<String>>>,
    screens: Option<&BTreeMap<String, String>>,
) -> Result<(), ConfigError> {
    if let Some(families) = font_family {
        for (family, fonts) in families {
            FontStack::new(family, fonts.clone())?;
        }
    }
    if let Some(screens) = screens {
        for (name, width) in screens {
            ScreenWidth::parse(name, width)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
        content = ["./index.html", "./src/**/*.{rs,html,css}"]

        [theme.font_family]
        sans = ["'Ubuntu Sans'", "sans-serif"]
        mono = ["'Ubuntu Mono'", "monospace"]

        [theme.extend.screens]
        "3xl" = "1856px"
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = StyleConfig::from_str(FULL_CONFIG).unwrap();

        assert_eq!(config.content.len(), 2);

        let families = config.theme.font_family.as_ref().unwrap();
        assert_eq!(
            families["sans"],
            vec!["'Ubuntu Sans'".to_string(), "sans-serif".to_string()]
        );

        let extend = config.theme.extend.as_ref().unwrap();
        assert_eq!(extend.screens.as_ref().unwrap()["3xl"], "1856px");
    }

    #[test]
    fn test_camel_case_alias() {
        let config = StyleConfig::from_str(
            r#"
            content = ["./index.html"]

            [theme.fontFamily]
            sans = ["sans-serif"]
        "#,
        )
        .unwrap();

        assert!(config.theme.font_family.is_some());
    }

    #[test]
    fn test_reserved_surfaces_preserved() {
        let config = StyleConfig::from_str(
            r#"
            content = ["./index.html"]
            plugins = []

            [variants]
        "#,
        )
        .unwrap();

        assert!(config.variants.is_empty());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_missing_content_rejected() {
        let err = StyleConfig::from_str("").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn test_malformed_pattern_rejected() {
        let err = StyleConfig::from_str(r#"content = ["["]"#).unwrap_err();
        assert!(matches!(err, ConfigError::PatternError(_)));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = StyleConfig::from_str(r#"content = [""]"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PatternError(PatternError::Empty)
        ));
    }

    #[test]
    fn test_empty_font_stack_rejected() {
        let err = StyleConfig::from_str(
            r#"
            content = ["./index.html"]

            [theme.font_family]
            sans = []
        "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::ThemeError(TokenError::EmptyFontStack { .. })
        ));
    }

    #[test]
    fn test_invalid_screen_length_rejected() {
        let err = StyleConfig::from_str(
            r#"
            content = ["./index.html"]

            [theme.extend.screens]
            "3xl" = "wide"
        "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::ThemeError(TokenError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = StyleConfig::from_str("content = [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
