//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use suitelink_domain::SuiteLinkError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SuiteLinkError);

impl From<InfraError> for SuiteLinkError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SuiteLinkError> for InfraError {
    fn from(value: SuiteLinkError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSuiteLinkError {
    fn into_suitelink(self) -> SuiteLinkError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SuiteLinkError */
/* -------------------------------------------------------------------------- */

impl IntoSuiteLinkError for HttpError {
    fn into_suitelink(self) -> SuiteLinkError {
        if self.is_timeout() {
            return SuiteLinkError::Network(format!("HTTP request timed out: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return SuiteLinkError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return SuiteLinkError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        // Status errors only appear through `error_for_status`, which the
        // dispatcher does not use; keep them remote-shaped anyway.
        if let Some(status) = self.status() {
            return SuiteLinkError::remote(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
            );
        }

        if self.is_decode() {
            return SuiteLinkError::Internal(format!("failed to decode response body: {self}"));
        }

        SuiteLinkError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_suitelink())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → SuiteLinkError */
/* -------------------------------------------------------------------------- */

impl IntoSuiteLinkError for JsonError {
    fn into_suitelink(self) -> SuiteLinkError {
        SuiteLinkError::Internal(format!("invalid JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_suitelink())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → SuiteLinkError */
/* -------------------------------------------------------------------------- */

impl IntoSuiteLinkError for UrlError {
    fn into_suitelink(self) -> SuiteLinkError {
        SuiteLinkError::InvalidInput(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_suitelink())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
