//! Shared test helpers for `suitelink-core` integration tests.
//!
//! Provides a scripted in-memory `PageSource` so pagination behaviour can be
//! asserted request by request without a network.

#![allow(dead_code)]

pub mod pages;

pub use pages::{page, page_with_next, ScriptedPageSource, ENDPOINT};
