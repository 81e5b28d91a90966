//! PostgreSQL implementation of the connectivity probe.

use async_trait::async_trait;
use serde_json::{Value, json};
use sqlx::{PgPool, Row};
use std::sync::Arc;
use std::time::Instant;

use crate::domain::probe::{DatabaseProbe, PingReport, ProbeError};

/// Probes PostgreSQL reachability with a trivial query.
///
/// Runs `SELECT 1 AS ok` against the pool and measures the full round trip,
/// including connection acquisition. The pool may be created lazily, so the
/// first ping after startup also covers the initial connect.
pub struct PgProbe {
    pool: Arc<PgPool>,
}

impl PgProbe {
    /// Creates a new probe over a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseProbe for PgProbe {
    async fn ping(&self) -> Result<PingReport, ProbeError> {
        let start = Instant::now();

        let rows = sqlx::query("SELECT 1 AS ok")
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(|e| ProbeError::new(e.to_string()))?;

        let latency_ms = start.elapsed().as_millis() as u64;

        let rows: Value = rows
            .iter()
            .map(|row| {
                let ok: i32 = row.get("ok");
                json!({ "ok": ok })
            })
            .collect::<Vec<Value>>()
            .into();

        Ok(PingReport { rows, latency_ms })
    }
}
