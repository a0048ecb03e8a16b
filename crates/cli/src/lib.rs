//! Command-line wiring: arguments → settings → configuration files → engine.

pub mod app;
pub mod args;
pub mod loader;
pub mod settings;

pub use app::{build_client, run};
pub use args::Args;
pub use loader::{load_auth_config, load_auth_configs};
pub use settings::Settings;
