//! API route configuration.
//!
//! All endpoints are public: this dashboard has no authentication layer.

use crate::api::handlers::{
    add_link_handler, db_check_handler, delete_link_handler, list_links_handler,
    visit_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /db`                  - Database connectivity check
/// - `GET    /links`               - List links, optional `?q=` filter
/// - `POST   /links`               - Register a new code→URL mapping
/// - `POST   /links/{code}/visit`  - Record a visit, returning the record
/// - `DELETE /links/{code}`        - Delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/db", get(db_check_handler))
        .route("/links", get(list_links_handler).post(add_link_handler))
        .route("/links/{code}", delete(delete_link_handler))
        .route("/links/{code}/visit", post(visit_link_handler))
}
