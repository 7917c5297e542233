//! HTTP verbs understood by the signer and dispatcher

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// HTTP method of a signed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl_wire_enum_conversions!(HttpMethod {
    Get => "GET",
    Post => "POST",
    Put => "PUT",
    Patch => "PATCH",
    Delete => "DELETE",
});

impl HttpMethod {
    /// Whether requests with this method carry a JSON body.
    pub const fn allows_body(&self) -> bool {
        !matches!(self, Self::Get | Self::Delete)
    }
}
