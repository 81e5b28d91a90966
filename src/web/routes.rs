//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::dashboard_handler;
use axum::{Router, routing::get};

/// Dashboard routes. Public: there is no login concept in this service.
///
/// # Endpoints
///
/// - `GET /` - Link management dashboard
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard_handler))
}
