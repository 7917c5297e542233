//! OAuth 1.0a request signing (token-based authentication)
//!
//! The ERP accepts OAuth 1.0a with two dialect rules:
//! - signatures use HMAC-SHA256 instead of HMAC-SHA1
//! - the header must carry `realm="<ACCOUNT-ID-UPPER>"`, which is not part
//!   of the signature base string
//!
//! The base string covers the method, the normalized URL and the URL's query
//! pairs. Request bodies are never signed; the remote service expects exactly
//! this and rejects signatures computed over JSON bodies.

use std::collections::BTreeMap;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::Sha256;
use suitelink_domain::constants::{OAUTH_NONCE_LENGTH, OAUTH_SIGNATURE_METHOD, OAUTH_VERSION};
use suitelink_domain::{HttpMethod, Result, SuiteLinkError};
use url::Url;

use super::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Computes `Authorization` headers for one set of credentials.
///
/// Holds no mutable state; a fresh nonce and timestamp are drawn per call so
/// concurrent callers never share a signature.
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: Arc<Credentials>,
}

impl OAuthSigner {
    /// Signer bound to one credential set.
    pub fn new(credentials: Arc<Credentials>) -> Self {
        Self { credentials }
    }

    /// Sign `method url` with a fresh nonce and the current timestamp.
    pub fn authorization_header(&self, method: HttpMethod, url: &Url) -> Result<String> {
        let nonce = generate_nonce();
        let timestamp = Utc::now().timestamp().to_string();
        self.authorization_header_with(method.as_str(), url.as_str(), &nonce, &timestamp)
    }

    /// Deterministic signing with caller-supplied nonce and timestamp.
    ///
    /// # Errors
    /// `SuiteLinkError::Signature` when any input is empty or the URL has no
    /// host.
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        nonce: &str,
        timestamp: &str,
    ) -> Result<String> {
        let method = method.trim();
        if method.is_empty() {
            return Err(SuiteLinkError::Signature("HTTP method must not be empty".into()));
        }
        if nonce.is_empty() || timestamp.is_empty() {
            return Err(SuiteLinkError::Signature("nonce and timestamp must not be empty".into()));
        }
        let url = parse_signing_url(url)?;

        let mut oauth_params: BTreeMap<&str, String> = BTreeMap::new();
        oauth_params.insert("oauth_consumer_key", self.credentials.consumer_key().to_string());
        oauth_params.insert("oauth_nonce", nonce.to_string());
        oauth_params.insert("oauth_signature_method", OAUTH_SIGNATURE_METHOD.to_string());
        oauth_params.insert("oauth_timestamp", timestamp.to_string());
        oauth_params.insert("oauth_token", self.credentials.token_id().to_string());
        oauth_params.insert("oauth_version", OAUTH_VERSION.to_string());

        let base_string = signature_base_string(method, &url, &oauth_params);
        let signature = self.sign(&base_string)?;
        oauth_params.insert("oauth_signature", signature);

        let mut parts: Vec<String> = oauth_params
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
            .collect();
        parts.push(format!("realm=\"{}\"", percent_encode(&self.credentials.realm())));

        Ok(format!("OAuth {}", parts.join(", ")))
    }

    fn sign(&self, base_string: &str) -> Result<String> {
        let signing_key = format!(
            "{}&{}",
            percent_encode(self.credentials.consumer_secret()),
            percent_encode(self.credentials.token_secret())
        );

        let mut mac = HmacSha256::new_from_slice(signing_key.as_bytes())
            .map_err(|err| SuiteLinkError::Signature(err.to_string()))?;
        mac.update(base_string.as_bytes());

        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// `METHOD&enc(base-url)&enc(sorted-params)` per RFC 5849 §3.4.1.
pub(crate) fn signature_base_string(
    method: &str,
    url: &Url,
    oauth_params: &BTreeMap<&str, String>,
) -> String {
    let mut params: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    params.extend(url.query_pairs().map(|(key, value)| (percent_encode(&key), percent_encode(&value))));
    params.sort();

    let param_string =
        params.iter().map(|(key, value)| format!("{key}={value}")).collect::<Vec<_>>().join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(&normalized_base_url(url)),
        percent_encode(&param_string)
    )
}

/// Scheme, host, non-default port and path; no query or fragment.
fn normalized_base_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    }
}

fn parse_signing_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SuiteLinkError::Signature("URL must not be empty".into()));
    }

    let url = Url::parse(raw)
        .map_err(|err| SuiteLinkError::Signature(format!("invalid URL '{raw}': {err}")))?;
    if url.host_str().is_none() {
        return Err(SuiteLinkError::Signature(format!("URL has no host: {raw}")));
    }

    Ok(url)
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(OAUTH_NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// RFC 3986 percent-encoding (unreserved characters pass through).
fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
