mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{delete, get, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use tinylink::api::handlers::{
    add_link_handler, delete_link_handler, list_links_handler, visit_link_handler,
};

/// Build a test server with all link routes over a fresh, empty registry.
fn make_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/links", get(list_links_handler).post(add_link_handler))
        .route("/api/links/{code}", delete(delete_link_handler))
        .route("/api/links/{code}/visit", post(visit_link_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

async fn add(server: &TestServer, code: &str, url: &str) {
    server
        .post("/api/links")
        .json(&json!({ "code": code, "url": url }))
        .await
        .assert_status(StatusCode::CREATED);
}

fn parse_timestamp(value: &Value) -> chrono::DateTime<chrono::Utc> {
    value
        .as_str()
        .expect("timestamp present")
        .parse()
        .expect("valid RFC 3339 timestamp")
}

async fn list(server: &TestServer, q: &str) -> Vec<Value> {
    let response = if q.is_empty() {
        server.get("/api/links").await
    } else {
        server.get("/api/links").add_query_param("q", q).await
    };
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

// ─── POST /api/links ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_link_success() {
    let server = make_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "code": "go", "url": "https://golang.org" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["code"], "go");
    assert_eq!(body["url"], "https://golang.org");
    assert_eq!(body["clicks"], 0);
    assert!(body["lastClicked"].is_null());
}

#[tokio::test]
async fn test_add_link_trims_inputs() {
    let server = make_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "code": "  docs  ", "url": "  https://example.com/docs  " }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["code"], "docs");
    assert_eq!(body["url"], "https://example.com/docs");
}

#[tokio::test]
async fn test_add_link_rejects_empty_fields() {
    let server = make_server();

    // Empty before trimming — caught by request validation.
    server
        .post("/api/links")
        .json(&json!({ "code": "", "url": "http://x" }))
        .await
        .assert_status_bad_request();

    server
        .post("/api/links")
        .json(&json!({ "code": "code", "url": "" }))
        .await
        .assert_status_bad_request();

    // Whitespace-only — caught by the registry after trimming.
    let response = server
        .post("/api/links")
        .json(&json!({ "code": "   ", "url": "http://x" }))
        .await;
    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    // Nothing was added.
    assert!(list(&server, "").await.is_empty());
}

#[tokio::test]
async fn test_add_link_rejects_duplicate_code_case_insensitively() {
    let server = make_server();
    add(&server, "code", "https://example.com/u1").await;

    let response = server
        .post("/api/links")
        .json(&json!({ "code": "CODE", "url": "https://example.com/u2" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "conflict");

    // Registry unchanged in size.
    assert_eq!(list(&server, "").await.len(), 1);
}

#[tokio::test]
async fn test_add_link_allows_duplicate_urls() {
    let server = make_server();
    add(&server, "one", "https://example.com").await;
    add(&server, "two", "https://example.com").await;

    assert_eq!(list(&server, "").await.len(), 2);
}

// ─── GET /api/links ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_orders_newest_first() {
    let server = make_server();
    add(&server, "a", "https://example.com/u1").await;
    add(&server, "b", "https://example.com/u2").await;

    let links = list(&server, "").await;
    let codes: Vec<&str> = links.iter().map(|l| l["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["b", "a"]);
}

#[tokio::test]
async fn test_search_filters_by_code_or_url() {
    let server = make_server();
    add(&server, "go", "https://golang.org").await;
    add(&server, "rs", "https://rust-lang.org").await;

    let links = list(&server, "go").await;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["code"], "go");

    // "lang" appears in both target URLs.
    let links = list(&server, "lang").await;
    let codes: Vec<&str> = links.iter().map(|l| l["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["rs", "go"]);

    assert!(list(&server, "zz").await.is_empty());
}

#[tokio::test]
async fn test_search_blank_query_returns_everything() {
    let server = make_server();
    add(&server, "go", "https://golang.org").await;
    add(&server, "rs", "https://rust-lang.org").await;

    assert_eq!(list(&server, "").await.len(), 2);
    assert_eq!(list(&server, "   ").await.len(), 2);
}

// ─── POST /api/links/{code}/visit ────────────────────────────────────────────

#[tokio::test]
async fn test_visit_increments_clicks_and_stamps_timestamp() {
    let server = make_server();
    add(&server, "go", "https://golang.org").await;

    let response = server.post("/api/links/go/visit").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["clicks"], 1);
    assert_eq!(body["url"], "https://golang.org");
    let first = parse_timestamp(&body["lastClicked"]);

    let response = server.post("/api/links/go/visit").await;
    let body = response.json::<Value>();
    assert_eq!(body["clicks"], 2);
    assert!(parse_timestamp(&body["lastClicked"]) >= first);
}

#[tokio::test]
async fn test_visit_leaves_other_records_untouched() {
    let server = make_server();
    add(&server, "go", "https://golang.org").await;
    add(&server, "rs", "https://rust-lang.org").await;

    server.post("/api/links/go/visit").await.assert_status_ok();

    let links = list(&server, "").await;
    let rs = links.iter().find(|l| l["code"] == "rs").unwrap();
    assert_eq!(rs["clicks"], 0);
    assert!(rs["lastClicked"].is_null());

    // Ordering unchanged by the mutation.
    let codes: Vec<&str> = links.iter().map(|l| l["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["rs", "go"]);
}

#[tokio::test]
async fn test_visit_unknown_code_not_found() {
    let server = make_server();
    add(&server, "go", "https://golang.org").await;

    server
        .post("/api/links/missing/visit")
        .await
        .assert_status_not_found();

    // Codes are matched exactly on visit.
    server
        .post("/api/links/GO/visit")
        .await
        .assert_status_not_found();
}

// ─── DELETE /api/links/{code} ────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let server = make_server();
    add(&server, "go", "https://golang.org").await;
    add(&server, "rs", "https://rust-lang.org").await;

    server
        .delete("/api/links/go")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let links = list(&server, "").await;
    assert_eq!(links.len(), 1);
    assert!(links.iter().all(|l| l["code"] != "go"));
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let server = make_server();
    add(&server, "go", "https://golang.org").await;

    server
        .delete("/api/links/nonexistent")
        .await
        .assert_status_not_found();

    // Exact match: case flip does not address the record.
    server.delete("/api/links/GO").await.assert_status_not_found();

    assert_eq!(list(&server, "").await.len(), 1);
}

#[tokio::test]
async fn test_delete_then_delete_again_not_found() {
    let server = make_server();
    add(&server, "go", "https://golang.org").await;

    server
        .delete("/api/links/go")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.delete("/api/links/go").await.assert_status_not_found();
}
