//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The onboarding core never reaches
//! the store or the router directly; both are injected through these traits.

pub mod navigation;
pub mod wallet_state;

pub use navigation::NavigationPort;
pub use wallet_state::WalletStatePort;
