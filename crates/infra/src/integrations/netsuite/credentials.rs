//! Credential store
//!
//! Built once from [`NetSuiteConfig`], immutable afterwards and shared
//! read-only (via `Arc`) by the signer and the dispatcher.

use std::fmt;

use suitelink_domain::{NetSuiteConfig, Result, SuiteLinkError};
use url::Url;

/// Validated token-based-authentication credentials for one account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    base_url: Url,
    account_id: String,
    consumer_key: String,
    consumer_secret: String,
    token_id: String,
    token_secret: String,
}

impl Credentials {
    /// Validate `config` and derive the account base URL.
    ///
    /// # Errors
    /// Returns `SuiteLinkError::Config` naming the first empty credential
    /// field, or when the base URL cannot be formed.
    pub fn from_config(config: &NetSuiteConfig) -> Result<Self> {
        let account_id = required("account_id", &config.account_id)?;
        let consumer_key = required("consumer_key", &config.consumer_key)?;
        let consumer_secret = required("consumer_secret", &config.consumer_secret)?;
        let token_id = required("token_id", &config.token_id)?;
        let token_secret = required("token_secret", &config.token_secret)?;

        let base_url = match config.base_url.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_base_url(raw)?,
            _ => account_base_url(&account_id, &config.api_host)?,
        };

        Ok(Self { base_url, account_id, consumer_key, consumer_secret, token_id, token_secret })
    }

    /// `https://<account>.<api-host>/` (or the configured override).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Account id as configured.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Value of the OAuth `realm` parameter: the upper-cased account id.
    pub fn realm(&self) -> String {
        self.account_id.to_uppercase()
    }

    /// OAuth consumer key.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// OAuth consumer secret.
    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    /// OAuth token id.
    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    /// OAuth token secret.
    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url.as_str())
            .field("account_id", &self.account_id)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SuiteLinkError::Config(format!("missing required credential: {field}")));
    }
    Ok(value.to_string())
}

/// Hostnames cannot contain `_`, so sandbox ids like `123456_SB1` map to
/// `123456-sb1.<api-host>`.
fn account_base_url(account_id: &str, api_host: &str) -> Result<Url> {
    let api_host = api_host.trim().trim_matches('.');
    if api_host.is_empty() {
        return Err(SuiteLinkError::Config("api_host must not be empty".into()));
    }

    let subdomain = account_id.to_lowercase().replace('_', "-");
    parse_base_url(&format!("https://{subdomain}.{api_host}"))
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|err| SuiteLinkError::Config(format!("invalid base URL '{raw}': {err}")))?;

    if url.host_str().is_none() || !matches!(url.scheme(), "http" | "https") {
        return Err(SuiteLinkError::Config(format!("base URL must be http(s) with a host: {raw}")));
    }

    Ok(url)
}
