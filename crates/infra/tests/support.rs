//! Shared helpers for infra integration tests

use serde_json::{json, Value};
use suitelink_domain::NetSuiteConfig;
use suitelink_infra::NetSuiteClient;
use wiremock::{MockServer, Request};

pub const ACCOUNT_ID: &str = "1234567_SB1";

/// Credentials pointed at the mock server.
pub fn config_for(server: &MockServer) -> NetSuiteConfig {
    NetSuiteConfig::new(ACCOUNT_ID, "consumer-key", "consumer-secret", "token-id", "token-secret")
        .with_base_url(server.uri())
        .with_timeout_secs(5)
}

pub fn client_for(server: &MockServer) -> NetSuiteClient {
    NetSuiteClient::new(&config_for(server)).expect("client should build")
}

/// SuiteQL page body with `id` rows and an optional `next` link.
pub fn suiteql_page(ids: &[u32], next: Option<&str>) -> Value {
    let items: Vec<Value> = ids.iter().map(|id| json!({ "id": id.to_string() })).collect();
    let links: Vec<Value> = next
        .map(|href| vec![json!({ "rel": "next", "href": href })])
        .unwrap_or_default();

    json!({
        "items": items,
        "count": ids.len(),
        "hasMore": next.is_some(),
        "links": links,
        "totalResults": 6,
    })
}

pub fn header(request: &Request, name: &str) -> Option<String> {
    request.headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_string)
}

/// `name="value"` pairs of an OAuth `Authorization` header.
pub fn oauth_params(request: &Request) -> Vec<(String, String)> {
    let header = header(request, "authorization").expect("authorization header");
    header
        .trim_start_matches("OAuth ")
        .split(", ")
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            Some((key.to_string(), value.trim_matches('"').to_string()))
        })
        .collect()
}

pub fn oauth_param(request: &Request, name: &str) -> Option<String> {
    oauth_params(request).into_iter().find(|(key, _)| key == name).map(|(_, value)| value)
}

pub fn ids(items: &[serde_json::Map<String, Value>]) -> Vec<String> {
    items.iter().map(|item| item["id"].as_str().unwrap_or_default().to_string()).collect()
}
