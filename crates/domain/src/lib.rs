//! # SuiteLink Domain
//!
//! Domain types shared by every SuiteLink crate.
//!
//! This crate contains:
//! - The error taxonomy and `Result` alias
//! - Configuration structures (credentials, transport, logging)
//! - Wire types for SuiteQL pages, links and error envelopes
//! - Endpoint and protocol constants
//!
//! ## Architecture
//! - No dependencies on other SuiteLink crates
//! - No I/O; only serde-level data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
