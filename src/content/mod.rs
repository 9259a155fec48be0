//! Content scope resolution
//!
//! Expands the configured content patterns into the concrete set of files
//! the downstream generator scans for class usage. The traversal is
//! read-only and the result is a deduplicated, deterministic set of
//! build-root-relative paths.

mod pattern;

pub use pattern::{ContentPattern, PatternError};

use globset::{GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Errors for content resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// The compiled set of content patterns for one project
#[derive(Debug)]
pub struct ContentSet {
    patterns: Vec<ContentPattern>,
    matcher: GlobSet,
}

impl ContentSet {
    /// Compile a pattern set from the declared pattern strings
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|p| ContentPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            builder.add(pattern.glob().clone());
        }

        Ok(Self {
            matcher: builder.build()?,
            patterns,
        })
    }

    /// The compiled patterns, in declaration order
    pub fn patterns(&self) -> &[ContentPattern] {
        &self.patterns
    }

    /// Whether a build-root-relative path matches any pattern
    pub fn is_match(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }

    /// Walk the build root and collect every matching file
    ///
    /// A file matched by more than one pattern appears once; a pattern that
    /// matches nothing contributes nothing. The returned set iterates in
    /// path order regardless of traversal order, so repeated runs against
    /// an unchanged tree produce identical output.
    pub fn resolve(&self, root: &Path) -> Result<BTreeSet<PathBuf>, ResolveError> {
        let mut files = BTreeSet::new();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel_path = match entry.path().strip_prefix(root) {
                Ok(rel) => rel,
                Err(_) => continue,
            };

            if self.matcher.is_match(rel_path) {
                files.insert(rel_path.to_path_buf());
            }
        }

        Ok(files)
    }
}
