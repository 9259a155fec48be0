//! Theme token types
//!
//! Declared theme values are parsed into typed tokens at load time, so
//! shape errors surface immediately rather than during generation.

use serde::{Deserialize, Serialize};

/// Units accepted for breakpoint widths
const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "ex", "ch", "vw", "vh", "vmin", "vmax", "cm", "mm", "in", "pt", "pc", "%",
];

/// Errors for theme token validation
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("font family '{family}' must declare at least one font")]
    EmptyFontStack { family: String },

    #[error("font family '{family}' contains an empty font name")]
    BlankFontName { family: String },

    #[error("screen '{name}': {value:?} is not a valid CSS length")]
    InvalidLength { name: String, value: String },
}

/// An ordered font fallback stack; the first entry is preferred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontStack(Vec<String>);

impl FontStack {
    /// Validate a declared font list for the named family
    pub fn new(family: &str, fonts: Vec<String>) -> Result<Self, TokenError> {
        if fonts.is_empty() {
            return Err(TokenError::EmptyFontStack {
                family: family.to_string(),
            });
        }
        if fonts.iter().any(|font| font.trim().is_empty()) {
            return Err(TokenError::BlankFontName {
                family: family.to_string(),
            });
        }
        Ok(Self(fonts))
    }

    /// The preferred font
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    /// The full stack in fallback order
    pub fn fonts(&self) -> &[String] {
        &self.0
    }

    /// Render as a CSS font-family value
    pub fn to_css(&self) -> String {
        self.0.join(", ")
    }
}

/// A validated breakpoint width (CSS length string, e.g. "1856px")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenWidth(String);

impl ScreenWidth {
    /// Validate a declared width for the named breakpoint
    pub fn parse(name: &str, value: &str) -> Result<Self, TokenError> {
        let trimmed = value.trim();
        if is_css_length(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(TokenError::InvalidLength {
                name: name.to_string(),
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A CSS length: a non-negative finite number followed by a known unit,
/// or a bare zero.
fn is_css_length(value: &str) -> bool {
    if value == "0" {
        return true;
    }
    LENGTH_UNITS.iter().any(|unit| {
        value
            .strip_suffix(unit)
            .map(|magnitude| {
                !magnitude.is_empty()
                    && magnitude
                        .parse::<f64>()
                        .map(|n| n.is_finite() && n >= 0.0)
                        .unwrap_or(false)
            })
            .unwrap_or(false)
    })
}
