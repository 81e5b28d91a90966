use axum::{Router, routing::get};
use axum_test::TestServer;
use tinylink::web::handlers::dashboard_handler;

#[tokio::test]
async fn test_dashboard_page_renders() {
    let app: Router = Router::new().route("/", get(dashboard_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Manage links"));
    assert!(html.contains("Search by code or URL"));
    assert!(html.contains("No links found"));
    assert!(html.contains("/static/dashboard.js"));
}
