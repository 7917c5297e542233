//! SuiteQL wire types and pagination results

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{MAX_PAGE_SIZE, NEXT_LINK_REL};

/// One result row. Rows are opaque to SuiteLink and passed through untouched.
pub type QueryItem = Map<String, Value>;

/// Request body of every SuiteQL call, first page and continuations alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPayload {
    /// SuiteQL statement text.
    pub q: String,
}

impl QueryPayload {
    /// Wrap a SuiteQL statement.
    pub fn new(query: impl Into<String>) -> Self {
        Self { q: query.into() }
    }
}

/// Hypermedia link attached to a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation name: `next`, `self`, `prev`, `first` or `last`.
    pub rel: String,
    /// Absolute URL or host-relative path.
    pub href: String,
}

/// One page as returned by the SuiteQL endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    /// Rows on this page.
    #[serde(default)]
    pub items: Vec<QueryItem>,
    /// Number of rows on this page.
    #[serde(default)]
    pub count: Option<u64>,
    /// More pages follow this one.
    #[serde(default)]
    pub has_more: bool,
    /// Offset of the first row on this page.
    #[serde(default)]
    pub offset: Option<u64>,
    /// Total rows matched by the query.
    #[serde(default)]
    pub total_results: Option<u64>,
    /// Hypermedia links, `next` among them.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl QueryPage {
    /// The `href` of the first `next` link, if any. Blank hrefs are ignored.
    pub fn next_href(&self) -> Option<&str> {
        self.links
            .iter()
            .filter(|link| link.rel.eq_ignore_ascii_case(NEXT_LINK_REL))
            .map(|link| link.href.trim())
            .find(|href| !href.is_empty())
    }
}

/// Caller controls for a query execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Follow `next` links until exhaustion. `false` stops after one page.
    pub fetch_all: bool,
    /// Hard ceiling on returned items.
    pub max_records: Option<usize>,
    /// `limit` sent with the first request (clamped to 1..=1000).
    pub page_size: Option<u32>,
    /// Turn continuation failures into a truncated result instead of an error.
    pub tolerate_partial: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { fetch_all: true, max_records: None, page_size: None, tolerate_partial: true }
    }
}

impl QueryOptions {
    /// Options that fetch only the first page.
    pub fn single_page() -> Self {
        Self { fetch_all: false, ..Self::default() }
    }

    /// Cap the number of returned items.
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = Some(max_records);
        self
    }

    /// Request `page_size` rows per page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Propagate continuation failures instead of truncating.
    pub fn strict(mut self) -> Self {
        self.tolerate_partial = false;
        self
    }

    /// Page size actually sent to the server, if any.
    pub fn effective_page_size(&self) -> Option<u32> {
        self.page_size.map(|size| size.clamp(1, MAX_PAGE_SIZE))
    }
}

/// Accumulated result of a (possibly multi-page) query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// Rows from every merged page, in server order.
    pub items: Vec<QueryItem>,
    /// A continuation page failed and the remaining pages were not fetched.
    pub truncated: bool,
    /// Message of the error that caused truncation.
    pub truncation_reason: Option<String>,
    /// HTTP requests sent, including GET fallbacks.
    pub requests_issued: usize,
    /// Pages successfully merged.
    pub pages_fetched: usize,
    /// Last `totalResults` reported by the server.
    pub total_results: Option<u64>,
}

impl QueryOutcome {
    /// Number of accumulated items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no items were returned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take the accumulated items.
    pub fn into_items(self) -> Vec<QueryItem> {
        self.items
    }
}
