//! Navigation adapters.

mod history;

pub use history::InMemoryNavigationHistory;
