//! Config module.
//! Flat string-to-string settings persisted as `config.json` next to the executable.
//! Uses serde for JSON serialization (pretty-printed, 2-space indent).
//! Keys are kept sorted so the file layout is stable across runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the config, resolved relative to the executable's directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config could not be serialized to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The running executable's path could not be read.
    #[error("could not locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    /// The running executable's path has no parent directory.
    #[error("could not determine the executable's directory")]
    NoExecutableDir,
}

// *************** Config Type ***************

/// Flat key-value configuration. Serializes as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    entries: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        [("key1", "value1"), ("key2", "value2")].into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Config
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Config {
    /// Empty config with no keys.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes to pretty JSON with 2-space indentation and no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a flat JSON object of strings.
    /// Stricter than the startup check, which accepts any syntactically valid JSON.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// *************** Path Resolution ***************

/// Resolves `config.json` in the directory holding the running executable.
///
/// # Errors
///
/// Returns [`ConfigError::CurrentExe`] when the executable path is unavailable,
/// and [`ConfigError::NoExecutableDir`] when it has no parent directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::CurrentExe)?;
    exe.parent()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoExecutableDir)
}
