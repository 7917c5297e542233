//! Transport port for the pagination loop

use async_trait::async_trait;
use suitelink_domain::{HttpMethod, QueryPage, QueryPayload, Result};
use url::Url;

/// Fetches single SuiteQL pages on behalf of the accumulator.
///
/// Implementations sign and send exactly one request per call. GET calls
/// must not send the payload or a `Content-Type` header.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Absolute URL of the SuiteQL endpoint. Path-only `next` links are
    /// resolved against it.
    fn query_endpoint(&self) -> Result<Url>;

    /// Fetch one page from `url` using `method`.
    async fn fetch_page(
        &self,
        method: HttpMethod,
        url: &Url,
        payload: &QueryPayload,
    ) -> Result<QueryPage>;
}
