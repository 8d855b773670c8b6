//! Tests for loading the TOML configuration.

use std::io::Write;
use std::path::PathBuf;
use strictly_timetravel::Config;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(*config.show_hints());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_file = \"/tmp/ttt.log\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();
    writeln!(file, "show_hints = false").unwrap();

    let config = Config::load_or_default(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.show_hints());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_hints = \"sometimes\"").unwrap();

    let err = Config::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
