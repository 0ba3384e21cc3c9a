//! # Configuration Loader
//!
//! `load_config` is pure data loading: read the TOML file and map it to the
//! `AppConfig` DTO, accepting whatever is in the file. Filling in defaults for
//! empty values happens in `resolve_config`, not here.

use anyhow::Context;
use ob_core::config::AppConfig;
use ob_core::onboarding::RouteId;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "wallet-onboarding";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Platform data directory for this app, e.g. `~/.local/share/wallet-onboarding`.
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("Failed to resolve local data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Build the effective configuration.
///
/// An explicit config file wins; empty values in it are filled from
/// `data_dir`. Without a config file everything is rooted at `data_dir`.
pub fn resolve_config(config_path: Option<&Path>, data_dir: &Path) -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::with_base_dir(data_dir);
    let Some(path) = config_path else {
        return Ok(defaults);
    };

    let mut config = load_config(path)?;
    if config.state_file_path.as_os_str().is_empty() {
        config.state_file_path = defaults.state_file_path;
    }
    if config.entry_route.is_empty() {
        config.entry_route = RouteId::WELCOME_PATH.to_string();
    }
    // an empty log_dir stays empty: stdout only
    Ok(config)
}
