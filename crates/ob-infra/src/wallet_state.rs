//! File-based wallet state repository
//!
//! This module provides a file-based implementation of the WalletStatePort,
//! persisting the wallet state to a local JSON file in the application data directory.

use async_trait::async_trait;
use ob_core::config::DEFAULT_STATE_FILE_NAME;
use ob_core::onboarding::WalletState;
use ob_core::ports::WalletStatePort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub const DEFAULT_WALLET_STATE_FILE: &str = DEFAULT_STATE_FILE_NAME;

pub struct FileWalletStateRepository {
    state_file_path: PathBuf,
}

impl FileWalletStateRepository {
    /// Create repository with custom file path
    pub fn new(state_file_path: PathBuf) -> Self {
        Self { state_file_path }
    }

    /// Create repository with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            state_file_path: base_dir.join(filename.into()),
        }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            state_file_path: base_dir.join(DEFAULT_WALLET_STATE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.state_file_path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.state_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl WalletStatePort for FileWalletStateRepository {
    async fn get_state(&self) -> anyhow::Result<WalletState> {
        if !self.state_file_path.exists() {
            debug!(path = %self.state_file_path.display(), "wallet state file missing, using default");
            return Ok(WalletState::default());
        }

        let content = fs::read_to_string(&self.state_file_path).await?;

        if content.trim().is_empty() {
            return Ok(WalletState::default());
        }

        let state: WalletState = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wallet state: {e}"))?;

        Ok(state)
    }

    async fn set_state(&self, state: &WalletState) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| anyhow::anyhow!("Failed to serialize wallet state: {e}"))?;

        let mut file = fs::File::create(&self.state_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create state file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write state file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync state file: {e}"))?;

        debug!(
            keyring_exists = state.keyring_exists,
            first_time_flow_type = ?state.first_time_flow_type,
            "wallet state persisted"
        );
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        if self.state_file_path.exists() {
            fs::remove_file(&self.state_file_path).await?;
        }
        Ok(())
    }
}
