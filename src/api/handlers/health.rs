//! Handler for the database connectivity check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::DbCheckResponse;
use crate::state::AppState;

/// Checks database connectivity and reports round-trip latency.
///
/// # Endpoint
///
/// `GET /api/db`
///
/// # Response Codes
///
/// - **200 OK**: probe query succeeded
/// - **500 Internal Server Error**: probe query failed
///
/// # Response
///
/// ```json
/// { "ok": true, "rows": [{ "ok": 1 }], "latencyMs": 3 }
/// ```
///
/// or on failure:
///
/// ```json
/// { "ok": false, "error": "pool timed out while waiting for an open connection" }
/// ```
///
/// Failures are caught here and converted to the structured body; no retry
/// is attempted. The caller interprets repeated failures.
pub async fn db_check_handler(
    State(state): State<AppState>,
) -> Result<Json<DbCheckResponse>, (StatusCode, Json<DbCheckResponse>)> {
    match state.db_probe.ping().await {
        Ok(report) => Ok(Json(DbCheckResponse::healthy(
            report.rows,
            report.latency_ms,
        ))),
        Err(e) => {
            tracing::warn!(error = %e, "database connectivity check failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbCheckResponse::unhealthy(e.to_string())),
            ))
        }
    }
}
