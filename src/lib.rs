//! Wallet onboarding host
//!
//! Bootstrap (config, tracing, wiring) and the command-line surface around
//! the onboarding entry controller.

pub mod bootstrap;
pub mod cli;
