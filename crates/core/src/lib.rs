//! # SuiteLink Core
//!
//! Pure client logic - no HTTP, no configuration loading.
//!
//! This crate contains:
//! - Port interfaces (`ErpClient`, `PageSource`)
//! - The SuiteQL pagination accumulator and its link/method rules
//! - Record path construction used by the record helpers
//!
//! ## Architecture Principles
//! - Only depends on `suitelink-domain`
//! - All network access goes through the `PageSource` / `ErpClient` traits
//! - Deterministic and testable with in-memory sources

pub mod erp_ports;
pub mod query;

// Re-export specific items to avoid ambiguity
pub use erp_ports::{record_path, ErpClient};
pub use query::accumulator::{accumulate, PaginationState};
pub use query::link::resolve_next_link;
pub use query::negotiation::{
    classify_rejection, mentions_unsupported_method, MethodRejection, UNSUPPORTED_METHOD_PHRASES,
};
pub use query::ports::PageSource;
