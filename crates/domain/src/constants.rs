//! Protocol constants
//!
//! Endpoint paths, header values and limits shared by the signer,
//! dispatcher and pagination loop.

// Endpoints
/// Host suffix after the account subdomain.
pub const DEFAULT_API_HOST: &str = "suitetalk.api.netsuite.com";
/// SuiteQL query endpoint.
pub const SUITEQL_PATH: &str = "/services/rest/query/v1/suiteql";
/// Prefix of the record endpoints.
pub const RECORD_PATH: &str = "/services/rest/record/v1";

// OAuth 1.0a
/// Value of `oauth_signature_method`.
pub const OAUTH_SIGNATURE_METHOD: &str = "HMAC-SHA256";
/// Value of `oauth_version`.
pub const OAUTH_VERSION: &str = "1.0";
/// Alphanumeric characters per nonce.
pub const OAUTH_NONCE_LENGTH: usize = 32;

// Headers
/// `Prefer` header value sent with every SuiteQL request.
pub const PREFER_TRANSIENT: &str = "transient";
/// `Accept` and `Content-Type` value.
pub const CONTENT_TYPE_JSON: &str = "application/json";

// SuiteQL paging
/// Largest `limit` the query endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;
/// Link relation of the continuation page.
pub const NEXT_LINK_REL: &str = "next";

// Transport
/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// `User-Agent` sent by the default transport.
pub const USER_AGENT: &str = concat!("suitelink/", env!("CARGO_PKG_VERSION"));

// Error reporting
/// Longest body excerpt kept as an error message.
pub const MAX_ERROR_BODY_CHARS: usize = 500;
