//! Dependency wiring.
//!
//! Builds the adapters named by `AppConfig` and injects them into the
//! controller.

use std::sync::Arc;

use ob_app::usecases::ResetOnboarding;
use ob_app::OnboardingEntryController;
use ob_core::config::AppConfig;
use ob_core::ports::{NavigationPort, WalletStatePort};
use ob_infra::{FileWalletStateRepository, InMemoryNavigationHistory};
use tracing::debug;

/// Assembled ports and the controller for one mount of the entry screen.
pub struct OnboardingRuntime {
    pub wallet_state: Arc<FileWalletStateRepository>,
    pub history: Arc<InMemoryNavigationHistory>,
    pub controller: OnboardingEntryController,
}

impl OnboardingRuntime {
    pub fn build(config: &AppConfig) -> Self {
        debug!(
            state_file = %config.state_file_path.display(),
            entry_route = %config.entry_route,
            "wiring onboarding runtime"
        );
        let wallet_state = Arc::new(FileWalletStateRepository::new(
            config.state_file_path.clone(),
        ));
        let history = Arc::new(InMemoryNavigationHistory::new(config.entry_route.clone()));
        let controller = OnboardingEntryController::from_ports(
            wallet_state.clone() as Arc<dyn WalletStatePort>,
            history.clone() as Arc<dyn NavigationPort>,
        );

        Self {
            wallet_state,
            history,
            controller,
        }
    }

    pub fn reset_onboarding(&self) -> ResetOnboarding {
        ResetOnboarding::new(self.wallet_state.clone())
    }
}
