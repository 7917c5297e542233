//! Signed request dispatcher
//!
//! Every outgoing call goes through [`NetSuiteClient::dispatch`]: resolve the
//! URL, sign it, attach headers, send once, then map the response to JSON or
//! to a remote error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Response;
use serde_json::Value;
use suitelink_core::{accumulate, resolve_next_link, ErpClient, PageSource};
use suitelink_domain::constants::{CONTENT_TYPE_JSON, PREFER_TRANSIENT, SUITEQL_PATH};
use suitelink_domain::{
    HttpMethod, NetSuiteConfig, QueryOptions, QueryOutcome, QueryPage, QueryPayload, Result,
    SuiteLinkError,
};
use tracing::{debug, instrument, warn};
use url::Url;

use super::auth::OAuthSigner;
use super::credentials::Credentials;
use super::errors::{parse_error_envelope, RemoteErrorCategory};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Client for one ERP account.
///
/// Cheap to share behind an `Arc`; holds no per-request state.
#[derive(Debug, Clone)]
pub struct NetSuiteClient {
    credentials: Arc<Credentials>,
    signer: OAuthSigner,
    http: HttpClient,
}

impl NetSuiteClient {
    /// Validate `config` and build a client. No network traffic happens here.
    ///
    /// # Errors
    /// `SuiteLinkError::Config` when a credential is missing or the base URL
    /// cannot be formed.
    pub fn new(config: &NetSuiteConfig) -> Result<Self> {
        let credentials = Credentials::from_config(config)?;
        Self::with_credentials(credentials, Duration::from_secs(config.timeout_secs))
    }

    /// Build from a validated credential store with a default transport.
    pub fn with_credentials(credentials: Credentials, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(credentials, http))
    }

    /// Build with a caller-supplied transport.
    pub fn with_http_client(credentials: Credentials, http: HttpClient) -> Self {
        let credentials = Arc::new(credentials);
        let signer = OAuthSigner::new(Arc::clone(&credentials));
        Self { credentials, signer, http }
    }

    /// Credential store this client signs with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Scheme, host and port every relative path is resolved against.
    pub fn base_url(&self) -> &Url {
        self.credentials.base_url()
    }

    /// Absolute URL for `path` with `query` appended.
    ///
    /// Absolute http(s) paths are used as-is; anything else is rooted on the
    /// account host.
    pub fn resolve_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = resolve_next_link(self.base_url(), path).ok_or_else(|| {
            SuiteLinkError::InvalidInput(format!("cannot build request URL from '{path}'"))
        })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }

    /// Sign and send one request, returning the parsed body.
    #[instrument(skip(self, body), fields(method = %method, url = %url))]
    async fn dispatch(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<&Value>,
        transient: bool,
    ) -> Result<Value> {
        let authorization = self.signer.authorization_header(method, &url)?;

        let mut builder = self
            .http
            .request(method, url.clone())
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, CONTENT_TYPE_JSON);

        if transient {
            builder = builder.header("Prefer", PREFER_TRANSIENT);
        }

        // GET and DELETE never carry a body, even if one was handed in.
        if let Some(body) = body.filter(|_| method.allows_body()) {
            let bytes = serde_json::to_vec(body).map_err(|err| SuiteLinkError::from(InfraError::from(err)))?;
            builder = builder.header(CONTENT_TYPE, CONTENT_TYPE_JSON).body(bytes);
        }

        let response = self.http.send(builder).await?;
        read_response(response).await
    }
}

async fn read_response(response: Response) -> Result<Value> {
    let status = response.status();
    let text = response.text().await.map_err(|err| SuiteLinkError::from(InfraError::from(err)))?;

    if !status.is_success() {
        let envelope = parse_error_envelope(status, text);
        let category = RemoteErrorCategory::from_status(envelope.status);
        warn!(
            status = envelope.status,
            %category,
            retryable = category.is_retryable(),
            message = %envelope.message,
            "remote request failed"
        );
        return Err(envelope.into_error());
    }

    if text.trim().is_empty() {
        debug!(status = status.as_u16(), "empty response body");
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(|err| SuiteLinkError::from(InfraError::from(err)))
}

#[async_trait]
impl PageSource for NetSuiteClient {
    fn query_endpoint(&self) -> Result<Url> {
        self.resolve_url(SUITEQL_PATH, &[])
    }

    async fn fetch_page(
        &self,
        method: HttpMethod,
        url: &Url,
        payload: &QueryPayload,
    ) -> Result<QueryPage> {
        let body = match method {
            HttpMethod::Post => Some(
                serde_json::to_value(payload)
                    .map_err(|err| SuiteLinkError::from(InfraError::from(err)))?,
            ),
            _ => None,
        };

        let value = self.dispatch(method, url.clone(), body.as_ref(), true).await?;
        serde_json::from_value(value).map_err(|err| {
            SuiteLinkError::Internal(format!("unexpected SuiteQL page shape: {err}"))
        })
    }
}

#[async_trait]
impl ErpClient for NetSuiteClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> Result<Value> {
        let url = self.resolve_url(path, query)?;
        self.dispatch(method, url, body, false).await
    }

    async fn execute_query(&self, query: &str, options: &QueryOptions) -> Result<QueryOutcome> {
        accumulate(self, query, options).await
    }
}
