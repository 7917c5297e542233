//! Error envelope returned by the remote service on non-2xx responses

use serde::{Deserialize, Serialize};

use crate::errors::SuiteLinkError;

/// Failed response as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// HTTP status code.
    pub status: u16,
    /// Response body as received.
    pub raw_body: String,
    /// Human-readable message extracted from the body (or a bounded excerpt
    /// of it when no known shape matched).
    pub message: String,
}

impl ErrorEnvelope {
    /// Convert into the typed error surfaced to callers.
    pub fn into_error(self) -> SuiteLinkError {
        SuiteLinkError::Remote { status: self.status, message: self.message }
    }
}

impl From<ErrorEnvelope> for SuiteLinkError {
    fn from(envelope: ErrorEnvelope) -> Self {
        envelope.into_error()
    }
}
