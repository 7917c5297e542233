//! Configuration management

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_HOST, DEFAULT_TIMEOUT_SECS};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// ERP connection settings.
    pub netsuite: NetSuiteConfig,
    /// Tracing subscriber settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Account credentials and transport settings for the ERP connection.
///
/// Credential fields default to empty so that a partially written config file
/// still deserializes; completeness is enforced when the credential store is
/// built, which reports the first missing field as a configuration error.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetSuiteConfig {
    /// Account id, e.g. `1234567_SB1`.
    #[serde(default)]
    pub account_id: String,
    /// Integration record consumer key.
    #[serde(default)]
    pub consumer_key: String,
    /// Integration record consumer secret. Never serialized.
    #[serde(default, skip_serializing)]
    pub consumer_secret: String,
    /// Access token id.
    #[serde(default)]
    pub token_id: String,
    /// Access token secret. Never serialized.
    #[serde(default, skip_serializing)]
    pub token_secret: String,
    /// API host appended to the account subdomain.
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Full base URL override (proxies, mock servers). When set, `api_host`
    /// is ignored for routing but the account id is still used for `realm`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Transport timeout applied to every request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl NetSuiteConfig {
    /// Create a configuration from the five credential values.
    pub fn new(
        account_id: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token_id: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token_id: token_id.into(),
            token_secret: token_secret.into(),
            api_host: default_api_host(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Override the API host.
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Route every request through `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the transport timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl fmt::Debug for NetSuiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetSuiteConfig")
            .field("account_id", &self.account_id)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}
