//! Pure routing decisions for the onboarding entry screen.
//!
//! No IO, no async. The state machine and the controller build on these.

use super::{FlowType, NavigationIntent, OnboardingIntent, RouteId, WalletState};

/// Decide whether activating the entry screen should redirect away from it.
///
/// A keyring that already exists means account creation already happened;
/// the recorded flow type then tells whether the wallet still needs to be
/// secured or whether onboarding can go straight to completion.
pub fn entry_redirect(wallet: &WalletState) -> Option<NavigationIntent> {
    if !wallet.keyring_exists {
        return None;
    }

    match wallet.first_time_flow_type {
        Some(FlowType::Import) => Some(NavigationIntent::Replace(RouteId::Completion)),
        Some(FlowType::Create) | None => {
            Some(NavigationIntent::Replace(RouteId::SecureYourWallet))
        }
    }
}

/// Effects of a user choice: the flow type to record, then where to go.
pub fn choice_effects(intent: OnboardingIntent) -> (FlowType, NavigationIntent) {
    (
        intent.flow_type(),
        NavigationIntent::Push(RouteId::Metametrics),
    )
}
