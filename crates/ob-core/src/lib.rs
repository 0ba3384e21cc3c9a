//! # ob-core
//!
//! Core domain models and routing decisions for wallet onboarding.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod onboarding;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use onboarding::{
    FlowType, NavigationIntent, OnboardingAction, OnboardingEntryState, OnboardingEvent,
    OnboardingIntent, OnboardingStateMachine, RouteId, WalletState,
};
