//! Wallet state port
//!
//! This port defines the contract for reading the persisted wallet state and
//! recording the first-time flow type. Implementations are provided by the
//! infrastructure layer (e.g., file-based storage).

use async_trait::async_trait;

use crate::onboarding::{FlowType, WalletState};

#[async_trait]
pub trait WalletStatePort: Send + Sync {
    /// Get current wallet state
    async fn get_state(&self) -> anyhow::Result<WalletState>;

    /// Update wallet state
    async fn set_state(&self, state: &WalletState) -> anyhow::Result<()>;

    /// Reset wallet state (for testing or re-onboarding)
    async fn reset(&self) -> anyhow::Result<()>;

    /// Record the first-time flow type, keeping the other fields
    async fn set_first_time_flow_type(&self, flow_type: FlowType) -> anyhow::Result<()> {
        let mut state = self.get_state().await?;
        state.first_time_flow_type = Some(flow_type);
        self.set_state(&state).await
    }
}

#[cfg(test)]
mockall::mock! {
    pub WalletStore {}

    #[async_trait]
    impl WalletStatePort for WalletStore {
        async fn get_state(&self) -> anyhow::Result<WalletState>;
        async fn set_state(&self, state: &WalletState) -> anyhow::Result<()>;
        async fn reset(&self) -> anyhow::Result<()>;
    }
}
