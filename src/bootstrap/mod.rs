pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{default_data_dir, load_config, resolve_config};
pub use wiring::OnboardingRuntime;
