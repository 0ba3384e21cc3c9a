//! Onboarding domain models
//!
//! This module defines the core domain models for the onboarding entry
//! screen: the persisted wallet state it reads, the flow type it records,
//! and the navigation intents it produces.

pub mod decision;
pub mod state_machine;

pub use decision::{choice_effects, entry_redirect};
pub use state_machine::{
    OnboardingAction, OnboardingEntryState, OnboardingEvent, OnboardingStateMachine,
};

use std::fmt;
use std::str::FromStr;

/// Which first-time flow the user picked on the entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    /// Create a brand new wallet.
    Create,
    /// Import an existing wallet from a recovery phrase.
    Import,
}

impl FlowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowType::Create => "create",
            FlowType::Import => "import",
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown first-time flow type: {0}")]
pub struct ParseFlowTypeError(pub String);

impl FromStr for FlowType {
    type Err = ParseFlowTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(FlowType::Create),
            "import" => Ok(FlowType::Import),
            other => Err(ParseFlowTypeError(other.to_string())),
        }
    }
}

/// Wallet state persisted by the store.
///
/// Fields missing from persisted data fall back to their defaults, so an
/// absent keyring flag reads as "no keyring".
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WalletState {
    /// Whether a keyring (account) has already been established
    pub keyring_exists: bool,
    /// Flow type recorded by a previous visit to the entry screen
    pub first_time_flow_type: Option<FlowType>,
}

/// Onboarding destinations reachable from the entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RouteId {
    SecureYourWallet,
    Completion,
    Metametrics,
}

impl RouteId {
    pub const ONBOARDING_ROOT: &'static str = "/onboarding";
    pub const WELCOME_PATH: &'static str = "/onboarding/welcome";

    /// Route path understood by the host's router.
    pub fn path(&self) -> &'static str {
        match self {
            RouteId::SecureYourWallet => "/onboarding/secure-your-wallet",
            RouteId::Completion => "/onboarding/completion",
            RouteId::Metametrics => "/onboarding/metametrics",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// How a navigation should touch the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NavigationIntent {
    /// Overwrite the current entry; the previous screen is not revisitable.
    Replace(RouteId),
    /// Append a new entry; back-navigation returns to the previous screen.
    Push(RouteId),
}

impl NavigationIntent {
    pub fn route(&self) -> RouteId {
        match self {
            NavigationIntent::Replace(route) | NavigationIntent::Push(route) => *route,
        }
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, NavigationIntent::Replace(_))
    }
}

/// Discrete user intents raised by the entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OnboardingIntent {
    ChooseCreate,
    ChooseImport,
}

impl OnboardingIntent {
    pub fn flow_type(&self) -> FlowType {
        match self {
            OnboardingIntent::ChooseCreate => FlowType::Create,
            OnboardingIntent::ChooseImport => FlowType::Import,
        }
    }
}

impl From<FlowType> for OnboardingIntent {
    fn from(flow_type: FlowType) -> Self {
        match flow_type {
            FlowType::Create => OnboardingIntent::ChooseCreate,
            FlowType::Import => OnboardingIntent::ChooseImport,
        }
    }
}
