//! Configuration loading
//!
//! Loads SuiteLink configuration from `.env`, environment variables and
//! config files.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_dotenv, load_from_env, load_from_file, probe_config_paths};
