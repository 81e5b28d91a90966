use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::probe::DatabaseProbe;
use crate::domain::registry::LinkRegistry;

/// Shared application state injected into all handlers.
///
/// The registry holds the session's link records in memory; it starts empty
/// and dies with the process. Handlers serialize their mutations through the
/// write lock, so each registry operation runs to completion atomically.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<LinkRegistry>>,
    pub db_probe: Arc<dyn DatabaseProbe>,
}

impl AppState {
    /// Creates state with an empty registry and the given probe.
    pub fn new(db_probe: Arc<dyn DatabaseProbe>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(LinkRegistry::new())),
            db_probe,
        }
    }
}
