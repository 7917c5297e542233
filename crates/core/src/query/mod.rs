//! SuiteQL query execution
//!
//! The endpoint pages results through `next` links whose shape and accepted
//! HTTP method vary between deployments. This module walks those links:
//!
//! - [`link`]: resolves absolute and path-only `next` links
//! - [`negotiation`]: POST-first fetching with a GET fallback on rejection
//! - [`accumulator`]: the bounded, partial-failure tolerant page loop
//! - [`ports`]: the transport seam implemented by the infrastructure crate

pub mod accumulator;
pub mod link;
pub mod negotiation;
pub mod ports;
