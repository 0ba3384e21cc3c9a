//! Onboarding use cases
//!
//! This module contains the use cases behind the onboarding entry screen:
//! reading the wallet state, recording the first-time flow type, resetting
//! onboarding, and the controller that ties them to navigation.

mod context;
pub mod controller;
pub mod get_wallet_state;
pub mod reset;
pub mod set_first_time_flow_type;

pub use controller::{OnboardingControllerError, OnboardingEntryController};
pub use get_wallet_state::GetWalletState;
pub use reset::ResetOnboarding;
pub use set_first_time_flow_type::SetFirstTimeFlowType;

#[cfg(test)]
pub(crate) mod test_support;
