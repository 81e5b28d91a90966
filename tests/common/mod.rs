#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tinylink::domain::probe::{DatabaseProbe, PingReport, ProbeError};
use tinylink::state::AppState;

/// Probe stub that always reports a reachable database.
pub struct StaticProbe;

#[async_trait]
impl DatabaseProbe for StaticProbe {
    async fn ping(&self) -> Result<PingReport, ProbeError> {
        Ok(PingReport {
            rows: json!([{ "ok": 1 }]),
            latency_ms: 2,
        })
    }
}

/// Probe stub that always fails.
pub struct FailingProbe;

#[async_trait]
impl DatabaseProbe for FailingProbe {
    async fn ping(&self) -> Result<PingReport, ProbeError> {
        Err(ProbeError::new("connection refused"))
    }
}

/// State with an empty registry and a probe that reports healthy.
pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(StaticProbe))
}

/// State with an empty registry and a probe that reports failure.
pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingProbe))
}
