//! Configuration loading tests
//!
//! Exercises the full load path: TOML parsing, load-time validation, and
//! source provenance. Complements the unit tests beside the schema with
//! on-disk fixtures.

use std::fs;
use stylescan::{ConfigError, PatternError, StyleConfig, TokenError};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("stylescan.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_from_file_records_provenance() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        content = ["./index.html", "./src/**/*.{rs,html,css}"]

        [theme.font_family]
        sans = ["'Ubuntu Sans'", "sans-serif"]
        mono = ["'Ubuntu Mono'", "monospace"]

        [theme.extend.screens]
        "3xl" = "1856px"
    "#,
    );

    let config = StyleConfig::from_file(&path).unwrap();

    assert_eq!(config.source.path.as_deref(), Some(path.to_str().unwrap()));
    assert_eq!(config.source.digest.as_ref().unwrap().len(), 64);
    assert_eq!(config.content.len(), 2);
}

#[test]
fn test_provenance_digest_stable_across_loads() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"content = ["./index.html"]"#);

    let first = StyleConfig::from_file(&path).unwrap();
    let second = StyleConfig::from_file(&path).unwrap();

    assert_eq!(first.source.digest, second.source.digest);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = StyleConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::IoError(_)));
}

#[test]
fn test_malformed_pattern_fails_at_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"content = ["["]"#);

    let err = StyleConfig::from_file(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::PatternError(PatternError::Glob(_))
    ));
}

#[test]
fn test_unbalanced_brace_fails_at_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"content = ["./src/**/*.{rs,html"]"#);

    assert!(StyleConfig::from_file(&path).is_err());
}

#[test]
fn test_theme_shape_errors_fail_at_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        content = ["./index.html"]

        [theme.screens]
        narrow = "not-a-length"
    "#,
    );

    let err = StyleConfig::from_file(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::ThemeError(TokenError::InvalidLength { .. })
    ));
}

#[test]
fn test_load_is_idempotent_on_error() {
    // Re-running against the same malformed input produces the same error
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"content = ["["]"#);

    let first = StyleConfig::from_file(&path).unwrap_err();
    let second = StyleConfig::from_file(&path).unwrap_err();

    assert_eq!(first.to_string(), second.to_string());
}
