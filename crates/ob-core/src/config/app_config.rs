use std::path::{Path, PathBuf};

use crate::onboarding::RouteId;

/// File name of the persisted wallet state inside the data directory.
pub const DEFAULT_STATE_FILE_NAME: &str = ".wallet_state";

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Wallet state file path (path info only, no existence check)
    pub state_file_path: PathBuf,

    /// Log directory; empty means stdout only
    pub log_dir: PathBuf,

    /// Route the navigation history starts on (may be empty - this is a fact)
    pub entry_route: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            state_file_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("state_file"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("log_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            entry_route: toml_value
                .get("navigation")
                .and_then(|n| n.get("entry_route"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            state_file_path: PathBuf::new(),
            log_dir: PathBuf::new(),
            entry_route: String::new(),
        }
    }

    /// Create AppConfig with paths rooted at `base_dir`
    ///
    /// **Note**: The base directory should be computed by the caller using
    /// platform-specific logic (e.g., `dirs` crate).
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            state_file_path: base_dir.join(DEFAULT_STATE_FILE_NAME),
            log_dir: base_dir.join("logs"),
            entry_route: RouteId::WELCOME_PATH.to_string(),
        }
    }
}
