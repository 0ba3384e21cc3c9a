use std::sync::Arc;

use ob_core::onboarding::FlowType;
use ob_core::ports::WalletStatePort;
use tracing::info;

/// Use case for recording the first-time flow type.
///
/// Overwrites any previous choice (re-running onboarding) and leaves the
/// keyring flag untouched.
pub struct SetFirstTimeFlowType {
    wallet_state: Arc<dyn WalletStatePort>,
}

impl SetFirstTimeFlowType {
    /// Create a new SetFirstTimeFlowType use case from trait objects.
    pub fn new(wallet_state: Arc<dyn WalletStatePort>) -> Self {
        Self { wallet_state }
    }

    /// Create a new SetFirstTimeFlowType use case from cloned Arc<dyn Port> references.
    pub fn from_ports(wallet_state: Arc<dyn WalletStatePort>) -> Self {
        Self::new(wallet_state)
    }

    pub async fn execute(&self, flow_type: FlowType) -> anyhow::Result<()> {
        self.wallet_state.set_first_time_flow_type(flow_type).await?;
        info!(%flow_type, "first-time flow type recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::onboarding::test_support::MockWalletStatePort;
    use ob_core::onboarding::WalletState;

    #[tokio::test]
    async fn test_execute_sets_flow_type() {
        let mock = Arc::new(MockWalletStatePort::new(WalletState::default()));
        let use_case = SetFirstTimeFlowType::new(mock.clone());

        use_case.execute(FlowType::Create).await.unwrap();

        let state = mock.get_state().await.unwrap();
        assert_eq!(state.first_time_flow_type, Some(FlowType::Create));
        assert_eq!(mock.flow_writes(), vec![FlowType::Create]);
    }

    #[tokio::test]
    async fn test_execute_preserves_keyring_flag() {
        let mock = Arc::new(MockWalletStatePort::new(WalletState {
            keyring_exists: true,
            first_time_flow_type: Some(FlowType::Create),
        }));
        let use_case = SetFirstTimeFlowType::new(mock.clone());

        use_case.execute(FlowType::Import).await.unwrap();

        let state = mock.get_state().await.unwrap();
        assert!(state.keyring_exists);
        assert_eq!(state.first_time_flow_type, Some(FlowType::Import));
    }

    #[tokio::test]
    async fn test_execute_propagates_store_failure() {
        let mock = Arc::new(MockWalletStatePort::failing_writes(WalletState::default()));
        let use_case = SetFirstTimeFlowType::new(mock.clone());

        let err = use_case.execute(FlowType::Import).await.unwrap_err();

        assert!(err.to_string().contains("disk full"));
        assert!(mock.flow_writes().is_empty());
    }
}
