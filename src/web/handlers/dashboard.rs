//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the link management dashboard.
///
/// Renders `templates/dashboard.html`: the add form, the search field, and
/// the record table. The page carries no server-side data; its script
/// drives everything through the JSON API under `/api`.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /`
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {}
}
