//! Observability: structured logging setup
//!
//! SuiteLink only emits `tracing` events; installing a subscriber is left to
//! the host application. [`init_tracing`] is a convenience for binaries and
//! tests that have none.

pub mod logging;

pub use logging::init_tracing;
