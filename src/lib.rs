//! config-ensure
//!
//! Startup bootstrap for a JSON config file: create it with defaults when
//! missing, recreate it when it no longer parses, leave it alone otherwise.
//!
//! ```no_run
//! use config_ensure::{Config, default_config_path, ensure_config};
//!
//! let path = default_config_path()?;
//! ensure_config(&path, &Config::default())?;
//! # Ok::<(), config_ensure::ConfigError>(())
//! ```

pub mod config;
pub mod ensure;
pub mod logging;

pub use config::{CONFIG_FILE_NAME, Config, ConfigError, default_config_path};
pub use ensure::{Outcome, ensure_config};
