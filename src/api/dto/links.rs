//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::LinkRecord;

/// Request to register a new code→URL mapping.
///
/// Both fields are required non-empty. Trimming and the case-insensitive
/// uniqueness check happen in the registry; validation here only catches
/// requests that are empty before trimming.
#[derive(Debug, Deserialize, Validate)]
pub struct AddLinkRequest {
    /// Short identifier (alias) for the link.
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: String,

    /// Target address. Free-form text; not checked for well-formedness.
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Query parameters for listing links.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring filter against code or url; blank or absent returns all.
    pub q: Option<String>,
}

/// JSON representation of a link record.
///
/// Field names follow the dashboard's wire format (`lastClicked` is null
/// until the first visit).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub clicks: u64,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl From<&LinkRecord> for LinkResponse {
    fn from(record: &LinkRecord) -> Self {
        Self {
            code: record.code.clone(),
            url: record.url.clone(),
            clicks: record.clicks,
            last_clicked: record.last_clicked,
        }
    }
}
