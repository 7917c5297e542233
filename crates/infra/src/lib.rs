//! # SuiteLink Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP transport (reqwest)
//! - The ERP integration: credentials, OAuth 1.0a signer, dispatcher, facade
//! - Configuration loading (`.env`, environment, JSON/TOML files)
//! - Logging setup
//!
//! ## Architecture
//! - Implements traits defined in `suitelink-core`
//! - Depends on `suitelink-domain` and `suitelink-core`
//! - Contains all "impure" code (network, environment, filesystem)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
pub use integrations::netsuite::{Credentials, NetSuiteClient, OAuthSigner, RemoteErrorCategory};
pub use observability::init_tracing;
