use anyhow::{Context, Result};
use clap::Command;
use config_ensure::{Config, default_config_path, ensure_config, logging};
use tracing::debug;

fn main() -> Result<()> {
    // No functional flags; clap still provides --help and --version
    Command::new("config-ensure")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ensures a valid JSON config file exists next to the executable")
        .get_matches();

    logging::init();

    let path = default_config_path().context("Failed to locate config file")?;

    // Must run before anything else touches the config
    let outcome = ensure_config(&path, &Config::default())
        .with_context(|| format!("Failed to ensure config file at {}", path.display()))?;

    debug!(%outcome, path = %path.display(), "Config ready");

    Ok(())
}
