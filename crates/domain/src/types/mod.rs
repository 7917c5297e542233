//! Domain types and wire models

pub mod envelope;
pub mod http;
pub mod query;
pub mod record;

pub use envelope::ErrorEnvelope;
pub use http::HttpMethod;
pub use query::{Link, QueryItem, QueryOptions, QueryOutcome, QueryPage, QueryPayload};
pub use record::ListParams;
