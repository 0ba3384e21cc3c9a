use std::sync::Arc;

use ob_core::onboarding::WalletState;
use ob_core::ports::WalletStatePort;

/// Use case for reading the persisted wallet state.
pub struct GetWalletState {
    wallet_state: Arc<dyn WalletStatePort>,
}

impl GetWalletState {
    /// Create a new GetWalletState use case from trait objects.
    pub fn new(wallet_state: Arc<dyn WalletStatePort>) -> Self {
        Self { wallet_state }
    }

    /// Create a new GetWalletState use case from cloned Arc<dyn Port> references.
    pub fn from_ports(wallet_state: Arc<dyn WalletStatePort>) -> Self {
        Self::new(wallet_state)
    }

    pub async fn execute(&self) -> anyhow::Result<WalletState> {
        self.wallet_state.get_state().await
    }
}
