//! SuiteQL pagination accumulator
//!
//! Walks `next` links until one of:
//! - the latest page reports no `hasMore`
//! - the latest page has no resolvable `next` link
//! - `max_records` is reached (the last page is trimmed to fit)
//! - `fetch_all` is off and one page was merged
//! - a continuation page fails (truncated result, or an error in strict mode)
//!
//! A failure on the first request is always returned as an error.

use suitelink_domain::{
    HttpMethod, QueryItem, QueryOptions, QueryOutcome, QueryPage, QueryPayload, Result,
    SuiteLinkError,
};
use tracing::{debug, info, warn};
use url::Url;

use super::link::resolve_next_link;
use super::negotiation::fetch_continuation;
use super::ports::PageSource;

/// Mutable state of one `accumulate` call. Never shared between calls.
#[derive(Debug, Default)]
pub struct PaginationState {
    items: Vec<QueryItem>,
    max_records: Option<usize>,
    requests_issued: usize,
    pages_fetched: usize,
    total_results: Option<u64>,
    truncation_reason: Option<String>,
}

impl PaginationState {
    /// Empty state; `max_records` of `None` means no cap.
    pub fn new(max_records: Option<usize>) -> Self {
        Self { max_records, ..Self::default() }
    }

    /// Items that may still be merged before the cap is hit.
    pub fn headroom(&self) -> usize {
        self.max_records.map_or(usize::MAX, |max| max.saturating_sub(self.items.len()))
    }

    /// True once `max_records` items have been merged.
    pub fn cap_reached(&self) -> bool {
        self.headroom() == 0
    }

    /// HTTP requests sent so far, GET fallbacks included.
    pub fn requests_issued(&self) -> usize {
        self.requests_issued
    }

    /// Pages merged so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Items merged so far.
    pub fn items(&self) -> &[QueryItem] {
        &self.items
    }

    /// Append a page's items, trimmed to the remaining headroom. Only the
    /// items are kept; the page itself is dropped.
    pub fn merge(&mut self, page: QueryPage) {
        let headroom = self.headroom();
        self.items.extend(page.items.into_iter().take(headroom));
        self.pages_fetched += 1;
        if page.total_results.is_some() {
            self.total_results = page.total_results;
        }
    }

    /// Stop accumulating because of a continuation failure.
    pub fn truncate(&mut self, err: &SuiteLinkError) {
        self.truncation_reason = Some(err.to_string());
    }

    /// Consume the state into the caller-facing outcome.
    pub fn finish(self) -> QueryOutcome {
        QueryOutcome {
            truncated: self.truncation_reason.is_some(),
            items: self.items,
            truncation_reason: self.truncation_reason,
            requests_issued: self.requests_issued,
            pages_fetched: self.pages_fetched,
            total_results: self.total_results,
        }
    }
}

/// Execute `query` against `source` and accumulate every page's items.
pub async fn accumulate<S>(source: &S, query: &str, options: &QueryOptions) -> Result<QueryOutcome>
where
    S: PageSource + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(SuiteLinkError::InvalidInput("query text must not be empty".into()));
    }

    let mut state = PaginationState::new(options.max_records);
    if state.cap_reached() {
        debug!("max_records is zero, skipping query");
        return Ok(state.finish());
    }

    let endpoint = source.query_endpoint()?;
    let payload = QueryPayload::new(query);
    let mut target = first_page_url(&endpoint, options);

    loop {
        let page = if state.pages_fetched == 0 {
            state.requests_issued += 1;
            source.fetch_page(HttpMethod::Post, &target, &payload).await?
        } else {
            match fetch_continuation(source, &target, &payload, &mut state.requests_issued).await {
                Ok(page) => page,
                Err(err) if options.tolerate_partial => {
                    warn!(
                        page = state.pages_fetched + 1,
                        accumulated = state.items.len(),
                        error = %err,
                        "continuation page failed, returning truncated result"
                    );
                    state.truncate(&err);
                    break;
                }
                Err(err) => return Err(err),
            }
        };

        // Recomputed from this page only; the previous link is never reused.
        let next = page.next_href().and_then(|href| resolve_next_link(&endpoint, href));
        let has_more = page.has_more;
        let page_items = page.items.len();

        state.merge(page);
        debug!(
            page = state.pages_fetched,
            items = page_items,
            accumulated = state.items.len(),
            has_more,
            "merged SuiteQL page"
        );

        if !options.fetch_all || state.cap_reached() || !has_more {
            break;
        }

        match next {
            Some(url) if url == target => {
                warn!(%url, "next link points at the page just fetched, stopping");
                break;
            }
            Some(url) => target = url,
            None => {
                debug!("hasMore set but no resolvable next link, stopping");
                break;
            }
        }
    }

    let outcome = state.finish();
    info!(
        items = outcome.items.len(),
        pages = outcome.pages_fetched,
        requests = outcome.requests_issued,
        truncated = outcome.truncated,
        "SuiteQL query complete"
    );
    Ok(outcome)
}

fn first_page_url(endpoint: &Url, options: &QueryOptions) -> Url {
    let mut url = endpoint.clone();
    if let Some(limit) = options.effective_page_size() {
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
    }
    url
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page(ids: &[u32]) -> QueryPage {
        QueryPage {
            items: ids
                .iter()
                .map(|id| json!({ "id": id.to_string() }).as_object().cloned().unwrap_or_default())
                .collect(),
            ..QueryPage::default()
        }
    }

    #[test]
    fn merge_trims_to_headroom() {
        let mut state = PaginationState::new(Some(3));
        state.merge(page(&[1, 2]));
        assert_eq!(state.headroom(), 1);

        state.merge(page(&[3, 4]));
        assert!(state.cap_reached());
        assert_eq!(state.items().len(), 3);
        assert_eq!(state.pages_fetched(), 2);
    }

    #[test]
    fn uncapped_state_never_reaches_cap() {
        let mut state = PaginationState::new(None);
        state.merge(page(&[1, 2, 3]));
        assert!(!state.cap_reached());
    }

    #[test]
    fn total_results_keeps_last_reported_value() {
        let mut state = PaginationState::new(None);
        state.merge(QueryPage { total_results: Some(10), ..page(&[1]) });
        state.merge(page(&[2]));
        assert_eq!(state.finish().total_results, Some(10));
    }

    #[test]
    fn truncation_marks_outcome() {
        let mut state = PaginationState::new(None);
        state.merge(page(&[1]));
        state.truncate(&SuiteLinkError::remote(500, "boom"));
        let outcome = state.finish();
        assert!(outcome.truncated);
        assert_eq!(outcome.truncation_reason.as_deref(), Some("Remote error (HTTP 500): boom"));
        assert_eq!(outcome.len(), 1);
    }

    #[test]
    fn first_page_url_appends_clamped_limit() {
        let endpoint = Url::parse("https://acct.example.com/services/rest/query/v1/suiteql").unwrap();
        let url = first_page_url(&endpoint, &QueryOptions::default().with_page_size(2500));
        assert_eq!(url.query(), Some("limit=1000"));

        let url = first_page_url(&endpoint, &QueryOptions::default());
        assert_eq!(url.query(), None);
    }
}
