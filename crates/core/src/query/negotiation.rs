//! HTTP method negotiation for continuation pages
//!
//! The query endpoint is documented as POST-only, yet some deployments
//! reject POST on continuation links. A rejection is recognised from the
//! status code first; the message match is a last resort for gateways that
//! answer with a different status.

use suitelink_domain::{HttpMethod, QueryPage, QueryPayload, Result, SuiteLinkError};
use tracing::debug;
use url::Url;

use super::ports::PageSource;

/// Phrases (lowercase) the service and its gateways use when they refuse the
/// request method.
pub const UNSUPPORTED_METHOD_PHRASES: &[&str] =
    &["unsupported http method", "method not supported", "method not allowed"];

const METHOD_NOT_ALLOWED: u16 = 405;

/// Why a response counts as a method rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodRejection {
    /// HTTP 405.
    StatusCode,
    /// Error message names an unsupported method, see [`mentions_unsupported_method`].
    MessagePattern,
}

/// True when `text` says the request method is not supported.
///
/// Matches any of [`UNSUPPORTED_METHOD_PHRASES`], or "not supported" in a
/// sentence that also mentions the method (`Request method 'POST' not supported`).
pub fn mentions_unsupported_method(text: &str) -> bool {
    let text = text.to_ascii_lowercase();
    UNSUPPORTED_METHOD_PHRASES.iter().any(|phrase| text.contains(phrase))
        || (text.contains("method") && text.contains("not supported"))
}

/// Classify an error as a method rejection, if it is one.
///
/// Only remote errors qualify; transport failures never trigger a fallback.
pub fn classify_rejection(err: &SuiteLinkError) -> Option<MethodRejection> {
    let SuiteLinkError::Remote { status, message } = err else {
        return None;
    };

    if *status == METHOD_NOT_ALLOWED {
        return Some(MethodRejection::StatusCode);
    }

    if mentions_unsupported_method(message) {
        return Some(MethodRejection::MessagePattern);
    }

    None
}

/// Fetch a continuation page: POST first, then GET at the same URL if the
/// POST was rejected for its method.
///
/// `requests_issued` is incremented once per request actually sent.
pub async fn fetch_continuation<S>(
    source: &S,
    url: &Url,
    payload: &QueryPayload,
    requests_issued: &mut usize,
) -> Result<QueryPage>
where
    S: PageSource + ?Sized,
{
    *requests_issued += 1;
    let post_err = match source.fetch_page(HttpMethod::Post, url, payload).await {
        Ok(page) => return Ok(page),
        Err(err) => err,
    };

    let Some(rejection) = classify_rejection(&post_err) else {
        return Err(post_err);
    };

    let post_status = post_err.status().unwrap_or(METHOD_NOT_ALLOWED);
    debug!(%url, ?rejection, post_status, "continuation POST rejected, retrying with GET");

    *requests_issued += 1;
    source.fetch_page(HttpMethod::Get, url, payload).await.map_err(|get_err| {
        SuiteLinkError::MethodNegotiationExhausted {
            post_status,
            get_status: get_err.status(),
            message: format!("POST rejected ({post_err}); GET fallback failed ({get_err})"),
        }
    })
}
