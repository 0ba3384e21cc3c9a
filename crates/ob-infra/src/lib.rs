//! Infrastructure adapters for wallet onboarding.
//!
//! Implements the `ob-core` ports: a JSON file store for the wallet state and
//! an in-memory navigation history.

pub mod navigation;
pub mod wallet_state;

pub use navigation::InMemoryNavigationHistory;
pub use wallet_state::{FileWalletStateRepository, DEFAULT_WALLET_STATE_FILE};
