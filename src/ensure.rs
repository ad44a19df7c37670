//! Startup check-and-repair for the config file.
//! Runs once, synchronously, before anything else reads the config.
//! Only JSON syntax is checked: a parseable file is never rewritten, whatever its shape.
//! No locking; two processes racing on the same path can interleave writes.

use crate::config::{Config, ConfigError};
use serde::de::IgnoredAny;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Which branch `ensure_config` took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No file existed; defaults were written.
    Created,
    /// The file was not valid JSON; defaults replaced it.
    Recreated,
    /// The file already held valid JSON and was left untouched.
    Valid,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Created => write!(f, "created"),
            Outcome::Recreated => write!(f, "recreated"),
            Outcome::Valid => write!(f, "valid"),
        }
    }
}

/// Ensures `path` holds syntactically valid JSON, writing `defaults` when it is
/// missing or unparseable.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for any read or write failure other than the file
/// being absent (missing parent directory, permission denied, path is a directory).
pub fn ensure_config(path: &Path, defaults: &Config) -> Result<Outcome, ConfigError> {
    let contents = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "Config file not found. Creating a new one with default values.");
            write_defaults(path, defaults)?;
            return Ok(Outcome::Created);
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if is_valid_json(&contents) {
        debug!(path = %path.display(), "Config file is valid JSON");
        return Ok(Outcome::Valid);
    }

    info!(path = %path.display(), "Config file is corrupted. Recreating with default values.");
    write_defaults(path, defaults)?;
    Ok(Outcome::Recreated)
}

// *************** Internal Functions ***************

/// Syntax-only check. Invalid UTF-8 sequences are read as U+FFFD, so a stray
/// non-UTF-8 byte inside a string does not make the file invalid.
fn is_valid_json(bytes: &[u8]) -> bool {
    let text = String::from_utf8_lossy(bytes);
    serde_json::from_str::<IgnoredAny>(&text).is_ok()
}

fn write_defaults(path: &Path, defaults: &Config) -> Result<(), ConfigError> {
    let content = defaults.to_pretty_json()?;
    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
