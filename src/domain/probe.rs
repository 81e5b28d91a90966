//! Connectivity probe contract for the database health check.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Result of a successful connectivity round trip.
#[derive(Debug, Clone)]
pub struct PingReport {
    /// Raw rows returned by the probe query, kept opaque for the caller.
    pub rows: Value,
    /// Wall-clock duration of the round trip in milliseconds.
    pub latency_ms: u64,
}

/// Failure while executing the connectivity check.
///
/// Carries only a human-readable message: the health endpoint reports
/// failures as structured text and callers never branch on the cause.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProbeError {
    pub message: String,
}

impl ProbeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Interface for the database connectivity check.
///
/// One blocking round trip per invocation, no retry. Implementations catch
/// driver failures and convert them into [`ProbeError`] rather than letting
/// them propagate.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProbe`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Executes one probe query and reports rows plus latency.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the database is unreachable or the query
    /// fails for any reason.
    async fn ping(&self) -> Result<PingReport, ProbeError>;
}
