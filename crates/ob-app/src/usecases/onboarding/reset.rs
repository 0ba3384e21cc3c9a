use std::sync::Arc;

use ob_core::ports::WalletStatePort;
use tracing::info;

/// Use case for re-running onboarding.
///
/// Clears the persisted wallet state, including the recorded flow type.
pub struct ResetOnboarding {
    wallet_state: Arc<dyn WalletStatePort>,
}

impl ResetOnboarding {
    pub fn new(wallet_state: Arc<dyn WalletStatePort>) -> Self {
        Self { wallet_state }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.wallet_state.reset().await?;
        info!("onboarding state reset");
        Ok(())
    }
}
