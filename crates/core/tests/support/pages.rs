//! Scripted page source and page builders

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use suitelink_core::PageSource;
use suitelink_domain::{
    HttpMethod, Link, QueryItem, QueryPage, QueryPayload, Result as DomainResult,
};
use url::Url;

pub const ENDPOINT: &str =
    "https://1234567.suitetalk.api.netsuite.com/services/rest/query/v1/suiteql";

/// Replays a fixed sequence of responses and records every call.
pub struct ScriptedPageSource {
    responses: Mutex<VecDeque<DomainResult<QueryPage>>>,
    calls: Mutex<Vec<(HttpMethod, String, String)>>,
}

impl ScriptedPageSource {
    pub fn new(responses: Vec<DomainResult<QueryPage>>) -> Self {
        Self { responses: Mutex::new(responses.into()), calls: Mutex::new(Vec::new()) }
    }

    /// `(method, url, query text)` for every call, in order.
    pub fn calls(&self) -> Vec<(HttpMethod, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PageSource for ScriptedPageSource {
    fn query_endpoint(&self) -> DomainResult<Url> {
        Ok(Url::parse(ENDPOINT).unwrap())
    }

    async fn fetch_page(
        &self,
        method: HttpMethod,
        url: &Url,
        payload: &QueryPayload,
    ) -> DomainResult<QueryPage> {
        self.calls.lock().unwrap().push((method, url.to_string(), payload.q.clone()));
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| panic!("unexpected request #{} to {url}", self.call_count()))
    }
}

fn items(ids: &[u32]) -> Vec<QueryItem> {
    ids.iter()
        .map(|id| json!({ "id": id.to_string(), "entityid": format!("Customer {id}") }))
        .map(|value| value.as_object().cloned().unwrap())
        .collect()
}

/// Final page: no `hasMore`, no links.
pub fn page(ids: &[u32]) -> QueryPage {
    QueryPage { count: Some(ids.len() as u64), items: items(ids), ..QueryPage::default() }
}

/// Page with `hasMore = true` and a `next` link.
pub fn page_with_next(ids: &[u32], next: &str) -> QueryPage {
    QueryPage {
        has_more: true,
        links: vec![Link { rel: "next".into(), href: next.into() }],
        ..page(ids)
    }
}
