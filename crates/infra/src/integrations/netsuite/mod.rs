//! ERP REST integration (token-based authentication)
//!
//! # Architecture
//!
//! - **Credentials**: `Credentials` - validated account credentials and base URL
//! - **Signer**: `OAuthSigner` - OAuth 1.0a HMAC-SHA256 headers with `realm`
//! - **Client**: `NetSuiteClient` - signed dispatcher implementing `ErpClient`
//!   and the `PageSource` used by the SuiteQL accumulator
//! - **Facade**: `init` / `client` / `reset` - optional process-wide client
//!
//! # Usage
//!
//! ```no_run
//! use suitelink_core::ErpClient;
//! use suitelink_domain::{NetSuiteConfig, QueryOptions};
//! use suitelink_infra::integrations::netsuite::NetSuiteClient;
//!
//! # async fn example() -> suitelink_domain::Result<()> {
//! let config = NetSuiteConfig::new("1234567_SB1", "ck", "cs", "tid", "ts");
//! let client = NetSuiteClient::new(&config)?;
//!
//! let outcome = client
//!     .execute_query("SELECT id, entityid FROM customer", &QueryOptions::default().with_max_records(500))
//!     .await?;
//! if outcome.truncated {
//!     tracing::warn!(reason = ?outcome.truncation_reason, "partial result");
//! }
//!
//! let customer = client.get_record("customer", "42").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Missing credentials: `SuiteLinkError::Config` at construction, before any request
//! - Non-2xx responses: `SuiteLinkError::Remote` with the extracted message
//! - No automatic retries; `RemoteErrorCategory::is_retryable` helps callers decide
pub mod auth;
pub mod client;
pub mod credentials;
pub mod errors;
pub mod facade;

pub use auth::OAuthSigner;
pub use client::NetSuiteClient;
pub use credentials::Credentials;
pub use errors::{parse_error_envelope, RemoteErrorCategory};
pub use facade::{client, init, init_from_env, reset};
