//! Handlers for link management endpoints (add, list, visit, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{AddLinkRequest, LinkResponse, SearchParams};
use crate::domain::registry::AddLinkError;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new code→URL mapping.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "code": "docs", "url": "https://example.com/docs" }
/// ```
///
/// # Responses
///
/// - **201 Created**: the new record, inserted at the front of the sequence
/// - **400 Bad Request**: a field is empty after trimming
/// - **409 Conflict**: the code is already taken (case-insensitive)
pub async fn add_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let mut registry = state.registry.write().await;
    let record = registry
        .add(&payload.code, &payload.url)
        .map_err(|e| match e {
            AddLinkError::EmptyCode => {
                AppError::bad_request(e.to_string(), json!({ "field": "code" }))
            }
            AddLinkError::EmptyUrl => {
                AppError::bad_request(e.to_string(), json!({ "field": "url" }))
            }
            AddLinkError::DuplicateCode(ref code) => {
                AppError::conflict(e.to_string(), json!({ "code": code }))
            }
        })?;

    tracing::info!(code = %record.code, "link added");

    Ok((StatusCode::CREATED, Json(LinkResponse::from(record))))
}

/// Lists link records, optionally filtered by a search query.
///
/// # Endpoint
///
/// `GET /api/links?q=<query>`
///
/// # Behavior
///
/// The query is matched case-insensitively as a substring of each record's
/// code or url. A blank or absent `q` returns the full sequence. Results
/// preserve registry order (newest first); the read never mutates counters
/// or ordering.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<LinkResponse>> {
    let registry = state.registry.read().await;
    let query = params.q.as_deref().unwrap_or("");

    let records = registry
        .search(query)
        .into_iter()
        .map(LinkResponse::from)
        .collect();

    Json(records)
}

/// Records a visit on a link and returns the updated record.
///
/// # Endpoint
///
/// `POST /api/links/{code}/visit`
///
/// # Behavior
///
/// Increments the click counter and stamps `lastClicked` before the caller
/// performs the navigation side effect with the returned `url`; the counter
/// update is therefore independent of whether navigation succeeds. The code
/// is matched exactly.
///
/// # Responses
///
/// - **200 OK**: the updated record
/// - **404 Not Found**: no record with that code
pub async fn visit_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let mut registry = state.registry.write().await;

    let record = registry.record_visit(&code).ok_or_else(|| {
        AppError::not_found("Link not found", json!({ "code": code }))
    })?;

    tracing::info!(code = %record.code, clicks = record.clicks, "visit recorded");

    Ok(Json(LinkResponse::from(record)))
}

/// Deletes a link record.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Responses
///
/// - **204 No Content**: the record was removed
/// - **404 Not Found**: no record with that code (exact match)
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut registry = state.registry.write().await;

    if registry.remove(&code) {
        tracing::info!(code = %code, "link deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "Link not found",
            json!({ "code": code }),
        ))
    }
}
