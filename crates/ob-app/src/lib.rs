//! Wallet onboarding application layer
//!
//! This crate contains the onboarding use cases and the controller that
//! drives the entry screen state machine against injected ports.

pub mod usecases;

pub use usecases::onboarding::{OnboardingControllerError, OnboardingEntryController};
