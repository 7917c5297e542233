//! `next` link resolution
//!
//! Links come back either absolute (`https://host/path?...`) or path-only
//! (`/services/rest/query/v1/suiteql?limit=..&offset=..`). Path-only links
//! always target the host of the query endpoint and keep their query string.
//! Query-only links (`?limit=..&offset=..`) stay on the endpoint path.

use url::Url;

/// Resolve a `next` link against the query endpoint.
///
/// Returns `None` for blank or unparseable links, which ends pagination.
pub fn resolve_next_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if is_absolute(href) {
        return Url::parse(href).ok();
    }

    if href.starts_with('?') {
        return base.join(href).ok();
    }

    // Leading slashes are collapsed so `//other-host/...` cannot switch hosts.
    let path = format!("/{}", href.trim_start_matches('/'));
    base.join(&path).ok()
}

fn is_absolute(href: &str) -> bool {
    has_prefix_ignore_case(href, "http://") || has_prefix_ignore_case(href, "https://")
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    let value = value.as_bytes();
    value.len() >= prefix.len() && value[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
