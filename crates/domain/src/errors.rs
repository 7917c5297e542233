//! Error types used throughout SuiteLink

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SuiteLink
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum SuiteLinkError {
    /// Missing or invalid configuration. Fatal, never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input handed to the request signer.
    #[error("Signature error: {0}")]
    Signature(String),

    /// Transport-level failure reaching the remote host.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the remote service.
    #[error("Remote error (HTTP {status}): {message}")]
    Remote { status: u16, message: String },

    /// Both POST and the GET fallback failed for a continuation link.
    #[error("Method negotiation exhausted (POST {post_status}): {message}")]
    MethodNegotiationExhausted { post_status: u16, get_status: Option<u16>, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SuiteLinkError {
    /// Build a remote error from a status code and extracted message.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote { status, message: message.into() }
    }

    /// HTTP status carried by the error, if the remote side produced one.
    ///
    /// For exhausted method negotiation this is the status of the final
    /// (GET) attempt when known, otherwise the POST status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::MethodNegotiationExhausted { post_status, get_status, .. } => {
                Some(get_status.unwrap_or(*post_status))
            }
            _ => None,
        }
    }

    /// True for failures reported by the remote service (including exhausted
    /// method negotiation, which propagates like a remote error).
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::MethodNegotiationExhausted { .. })
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Signature(_) => "signature",
            Self::Network(_) => "network",
            Self::Remote { .. } => "remote",
            Self::MethodNegotiationExhausted { .. } => "method_negotiation_exhausted",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for SuiteLink operations
pub type Result<T> = std::result::Result<T, SuiteLinkError>;
