//! End-to-end SuiteQL pagination against a mock server
//!
//! **Coverage:**
//! - Path-only, query-only and absolute `next` links, all pages POSTed with the query body
//! - `Prefer: transient` and signing on every page
//! - 405 on a continuation page → GET on the same URL without a body
//! - A method refusal named only in the error `title` also triggers the GET
//! - Continuation failures: truncated by default, errors in strict mode
//! - Bounded fetches issue no extra requests

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use serde_json::json;
use suitelink_core::ErpClient;
use suitelink_domain::constants::SUITEQL_PATH;
use suitelink_domain::{QueryOptions, SuiteLinkError};
use support::{client_for, header, ids, oauth_param, suiteql_page, ACCOUNT_ID};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = "SELECT id, entityid FROM customer";
const NEXT_2: &str = "/services/rest/query/v1/suiteql?limit=2&offset=2";

/// First page answers any POST without a more specific match.
async fn mount_first_page(server: &MockServer, next: Option<&str>) {
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(suiteql_page(&[1, 2], next)))
        .with_priority(5)
        .mount(server)
        .await;
}

#[tokio::test]
async fn follows_relative_and_absolute_links_across_three_pages() {
    let server = MockServer::start().await;
    let next_4 = format!("{}{}?limit=2&offset=4", server.uri(), SUITEQL_PATH);

    mount_first_page(&server, Some(NEXT_2)).await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suiteql_page(&[3, 4], Some(&next_4))))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suiteql_page(&[5, 6], None)))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.query_all(QUERY).await.expect("query");

    assert_eq!(ids(&outcome.items), vec!["1", "2", "3", "4", "5", "6"]);
    assert!(!outcome.truncated);
    assert_eq!(outcome.requests_issued, 3);
    assert_eq!(outcome.total_results, Some(6));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    for request in &requests {
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(header(request, "prefer").as_deref(), Some("transient"));
        assert_eq!(header(request, "content-type").as_deref(), Some("application/json"));
        assert_eq!(oauth_param(request, "realm").as_deref(), Some(ACCOUNT_ID));
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!({ "q": QUERY }));
    }
}

#[tokio::test]
async fn query_only_link_stays_on_suiteql_path() {
    let server = MockServer::start().await;
    mount_first_page(&server, Some("?limit=2&offset=2")).await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suiteql_page(&[3], None)))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.query_all(QUERY).await.expect("query");

    assert_eq!(ids(&outcome.items), vec!["1", "2", "3"]);
    assert!(!outcome.truncated);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[1].url.path(), SUITEQL_PATH);
    assert_eq!(requests[1].url.query(), Some("limit=2&offset=2"));
}

#[tokio::test]
async fn single_page_mode_issues_one_request() {
    let server = MockServer::start().await;
    mount_first_page(&server, Some(NEXT_2)).await;

    let client = client_for(&server);
    let outcome = client.execute_query(QUERY, &QueryOptions::single_page()).await.expect("query");

    assert_eq!(outcome.len(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn page_size_becomes_limit_on_first_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .and(query_param("limit", "2"))
        .and(body_json(json!({ "q": QUERY })))
        .respond_with(ResponseTemplate::new(200).set_body_json(suiteql_page(&[1, 2], None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = QueryOptions::default().with_page_size(2);
    let outcome = client.execute_query(QUERY, &options).await.expect("query");

    assert_eq!(outcome.len(), 2);
}

#[tokio::test]
async fn method_not_allowed_falls_back_to_get_on_same_url() {
    let server = MockServer::start().await;
    mount_first_page(&server, Some(NEXT_2)).await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(405).set_body_json(json!({
            "title": "Method Not Allowed",
            "status": 405
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suiteql_page(&[3, 4], None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.query_all(QUERY).await.expect("query");

    assert_eq!(ids(&outcome.items), vec!["1", "2", "3", "4"]);
    assert!(!outcome.truncated);
    assert_eq!(outcome.requests_issued, 3);

    let requests = server.received_requests().await.unwrap();
    let (post, get) = (&requests[1], &requests[2]);
    assert_eq!(post.method.as_str(), "POST");
    assert_eq!(get.method.as_str(), "GET");
    assert_eq!(post.url.path(), get.url.path());
    assert_eq!(post.url.query(), get.url.query());
    assert!(get.body.is_empty());
    assert_eq!(header(get, "content-type"), None);
    assert_eq!(header(get, "prefer").as_deref(), Some("transient"));
    assert_ne!(oauth_param(post, "oauth_nonce"), oauth_param(get, "oauth_nonce"));
}

#[tokio::test]
async fn method_refusal_in_title_falls_back_to_get() {
    let server = MockServer::start().await;
    mount_first_page(&server, Some(NEXT_2)).await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "title": "Unsupported HTTP method",
            "status": 400,
            "o:errorDetails": [{ "detail": "The request could not be processed." }]
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suiteql_page(&[3, 4], None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.execute_query(QUERY, &QueryOptions::default().strict()).await.expect("query");

    assert_eq!(ids(&outcome.items), vec!["1", "2", "3", "4"]);
    assert_eq!(outcome.requests_issued, 3);
}

#[tokio::test]
async fn continuation_failure_returns_truncated_result() {
    let server = MockServer::start().await;
    mount_first_page(&server, Some(NEXT_2)).await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "title": "Internal Server Error",
            "o:errorDetails": [{ "detail": "An unexpected error occurred." }]
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.query_all(QUERY).await.expect("query");

    assert_eq!(ids(&outcome.items), vec!["1", "2"]);
    assert!(outcome.truncated);
    assert!(outcome.truncation_reason.unwrap().contains("An unexpected error occurred."));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn continuation_failure_is_an_error_in_strict_mode() {
    let server = MockServer::start().await;
    mount_first_page(&server, Some(NEXT_2)).await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "title": "Too Many Requests" })))
        .with_priority(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.execute_query(QUERY, &QueryOptions::default().strict()).await.unwrap_err();

    assert_eq!(err, SuiteLinkError::remote(429, "Too Many Requests"));
}

#[tokio::test]
async fn first_page_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SUITEQL_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "title": "Bad Request",
            "o:errorDetails": [{ "detail": "Invalid search query." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.query_all(QUERY).await.unwrap_err();

    assert_eq!(err, SuiteLinkError::remote(400, "Invalid search query."));
}

#[tokio::test]
async fn max_records_stops_without_extra_request() {
    let server = MockServer::start().await;
    mount_first_page(&server, Some(NEXT_2)).await;

    let client = client_for(&server);
    let options = QueryOptions::default().with_max_records(1);
    let outcome = client.execute_query(QUERY, &options).await.expect("query");

    assert_eq!(ids(&outcome.items), vec!["1"]);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
