//! Startup behaviour of `ensure_config` against real files.

use config_ensure::{Config, ConfigError, Outcome, ensure_config};
use std::fs;
use tempfile::TempDir;

const DEFAULT_JSON: &str = "{\n  \"key1\": \"value1\",\n  \"key2\": \"value2\"\n}";

fn read_config(path: &std::path::Path) -> Config {
    Config::from_json(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_absent_file_gets_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    assert_eq!(ensure_config(&path, &Config::default()).unwrap(), Outcome::Created);

    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_JSON);
    assert_eq!(read_config(&path), Config::default());
}

#[test]
fn test_malformed_file_is_replaced_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{not json").unwrap();

    assert_eq!(ensure_config(&path, &Config::default()).unwrap(), Outcome::Recreated);

    assert_eq!(read_config(&path), Config::default());
}

#[test]
fn test_empty_file_gets_same_content_as_absent_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "").unwrap();

    ensure_config(&path, &Config::default()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_JSON);
}

#[test]
fn test_valid_json_of_other_shape_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    for original in [
        r#"{"key1":"custom","extra":true}"#,
        "[1, 2, 3]\n",
        "null",
        "{\n    \"nested\": {\"deep\": [null]}\n}\n",
    ] {
        fs::write(&path, original).unwrap();

        assert_eq!(ensure_config(&path, &Config::default()).unwrap(), Outcome::Valid);
        assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
    }
}

#[test]
fn test_non_utf8_bytes_inside_valid_json_are_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let original: &[u8] = b"{\"user\":\"caf\xe9\"}";
    fs::write(&path, original).unwrap();

    assert_eq!(ensure_config(&path, &Config::default()).unwrap(), Outcome::Valid);

    assert_eq!(fs::read(&path).unwrap(), original);
}

#[test]
fn test_deeply_nested_json_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let original = format!("{}{}", "[".repeat(200), "]".repeat(200));
    fs::write(&path, &original).unwrap();

    assert_eq!(ensure_config(&path, &Config::default()).unwrap(), Outcome::Valid);

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_repeated_runs_are_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ truncated").unwrap();

    assert_eq!(ensure_config(&path, &Config::default()).unwrap(), Outcome::Recreated);
    let first = fs::read(&path).unwrap();
    assert_eq!(ensure_config(&path, &Config::default()).unwrap(), Outcome::Valid);
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_write_failure_propagates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("config.json");

    let err = ensure_config(&path, &Config::default()).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("no_such_dir"), "got {err}");
}
