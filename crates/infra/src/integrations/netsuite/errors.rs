//! Remote error parsing and classification
//!
//! Failed responses carry a JSON problem document. The useful text lives in
//! one of several places depending on the endpoint:
//!
//! ```json
//! { "title": "Bad Request", "status": 400,
//!   "o:errorDetails": [{ "detail": "Invalid search query...", "o:errorCode": "INVALID_PARAMETER" }] }
//! ```

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use suitelink_core::mentions_unsupported_method;
use suitelink_domain::constants::MAX_ERROR_BODY_CHARS;
use suitelink_domain::ErrorEnvelope;

/// Coarse classification of a remote failure, for logging and caller retry
/// decisions. SuiteLink itself never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorCategory {
    /// 401, 403: bad or revoked token, or a signature mismatch
    Authentication,

    /// 429 and the concurrency governance 503s
    RateLimited,

    /// 405: method not allowed on this URL
    MethodNotAllowed,

    /// Other 4xx: malformed query, unknown record, bad payload
    Validation,

    /// 5xx
    ServerUnavailable,

    /// Anything else, e.g. an unexpected 3xx
    Unknown,
}

impl RemoteErrorCategory {
    /// Category for an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Authentication,
            429 => Self::RateLimited,
            405 => Self::MethodNotAllowed,
            400..=499 => Self::Validation,
            500..=599 => Self::ServerUnavailable,
            _ => Self::Unknown,
        }
    }

    /// Returns true if a caller may reasonably retry the same request later
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ServerUnavailable)
    }
}

impl fmt::Display for RemoteErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => write!(f, "Authentication Failed"),
            Self::RateLimited => write!(f, "Rate Limited"),
            Self::MethodNotAllowed => write!(f, "Method Not Allowed"),
            Self::Validation => write!(f, "Validation Error"),
            Self::ServerUnavailable => write!(f, "Server Unavailable"),
            Self::Unknown => write!(f, "Unknown Error"),
        }
    }
}

/// Build the envelope for a non-2xx response.
pub fn parse_error_envelope(status: StatusCode, raw_body: String) -> ErrorEnvelope {
    let message = extract_message(&raw_body).unwrap_or_else(|| {
        let excerpt = truncate_chars(raw_body.trim(), MAX_ERROR_BODY_CHARS);
        if excerpt.is_empty() {
            status.canonical_reason().unwrap_or("Unknown status").to_string()
        } else {
            excerpt
        }
    });

    // Keep a method refusal visible to the continuation fallback even when
    // the body carries it outside the field chosen for the message.
    let message = match method_rejection_hint(&raw_body, &message) {
        Some(hint) => format!("{message} ({hint})"),
        None => message,
    };

    ErrorEnvelope { status: status.as_u16(), raw_body, message }
}

/// `o:errorDetails[0].detail`, then `detail`, then `title`.
fn extract_message(raw_body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(raw_body).ok()?;

    let candidates = [
        json.get("o:errorDetails").and_then(|details| details.get(0)).and_then(|d| d.get("detail")),
        json.get("detail"),
        json.get("title"),
    ];

    let message = candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string);
    message
}

/// Body text naming an unsupported method, when `message` does not already.
fn method_rejection_hint(raw_body: &str, message: &str) -> Option<String> {
    if mentions_unsupported_method(message) || !mentions_unsupported_method(raw_body) {
        return None;
    }

    let hint = serde_json::from_str::<Value>(raw_body)
        .ok()
        .and_then(|json| {
            let mut texts = Vec::new();
            collect_strings(&json, &mut texts);
            texts.into_iter().find(|text| mentions_unsupported_method(text))
        })
        .unwrap_or_else(|| raw_body.to_string());

    Some(truncate_chars(hint.trim(), MAX_ERROR_BODY_CHARS))
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => out.push(text.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_strings(item, out)),
        Value::Object(fields) => fields.values().for_each(|field| collect_strings(field, out)),
        _ => {}
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
