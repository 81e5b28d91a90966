//! DTOs for the database connectivity check endpoint.

use serde::Serialize;
use serde_json::Value;

/// Response body for `GET /api/db`.
///
/// Untagged: the wire shape is `{ok, rows, latencyMs}` on success and
/// `{ok, error}` on failure, with no discriminator field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DbCheckResponse {
    Healthy {
        ok: bool,
        /// Opaque rows returned by the probe query.
        rows: Value,
        #[serde(rename = "latencyMs")]
        latency_ms: u64,
    },
    Unhealthy {
        ok: bool,
        error: String,
    },
}

impl DbCheckResponse {
    /// Builds the success body.
    pub fn healthy(rows: Value, latency_ms: u64) -> Self {
        Self::Healthy {
            ok: true,
            rows,
            latency_ms,
        }
    }

    /// Builds the failure body from an error message.
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self::Unhealthy {
            ok: false,
            error: error.into(),
        }
    }
}
