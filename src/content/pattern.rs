//! Content glob patterns
//!
//! A content pattern selects source files to scan for class usage, e.g.
//! `./src/**/*.{rs,html,css}`. Patterns support `**` recursion and brace
//! alternation over extensions; they are compiled once at load time and
//! matched against build-root-relative paths.

use globset::{Glob, GlobBuilder};

/// Errors for content pattern compilation
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("content pattern must not be empty")]
    Empty,

    #[error("malformed glob pattern: {0}")]
    Glob(#[from] globset::Error),
}

/// A compiled content glob
#[derive(Debug, Clone)]
pub struct ContentPattern {
    raw: String,
    glob: Glob,
}

impl ContentPattern {
    /// Parse and compile a pattern string
    ///
    /// Fails on empty patterns and on malformed glob syntax (unbalanced
    /// braces or brackets). A pattern that matches nothing is still valid.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PatternError::Empty);
        }

        // Patterns are written relative to the build root; a leading "./"
        // is redundant once matching happens against root-relative paths.
        let normalized = trimmed.strip_prefix("./").unwrap_or(trimmed);

        let glob = GlobBuilder::new(normalized)
            .literal_separator(true)
            .build()?;

        Ok(Self {
            raw: raw.to_string(),
            glob,
        })
    }

    /// The pattern as declared in the configuration
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn glob(&self) -> &Glob {
        &self.glob
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        let pattern = ContentPattern::parse("./index.html").unwrap();
        assert_eq!(pattern.as_str(), "./index.html");
    }

    #[test]
    fn test_parse_recursive_with_braces() {
        assert!(ContentPattern::parse("./src/**/*.{rs,html,css}").is_ok());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(
            ContentPattern::parse(""),
            Err(PatternError::Empty)
        ));
        assert!(matches!(
            ContentPattern::parse("   "),
            Err(PatternError::Empty)
        ));
    }

    #[test]
    fn test_unbalanced_bracket_rejected() {
        assert!(matches!(
            ContentPattern::parse("["),
            Err(PatternError::Glob(_))
        ));
    }

    #[test]
    fn test_unbalanced_brace_rejected() {
        assert!(matches!(
            ContentPattern::parse("src/*.{rs,html"),
            Err(PatternError::Glob(_))
        ));
    }
}
