//! HTTP server initialization and runtime setup.
//!
//! Handles pool creation, state wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::PgProbe;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// The database pool is created lazily: the dashboard must come up and the
/// connectivity check must report a structured failure even when PostgreSQL
/// is unreachable at startup, so no connection is attempted here. Link state
/// lives in memory and starts empty on every launch.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_lazy(&config.database_url)?;
    tracing::info!("Database pool created (lazy connect)");

    let db_probe = Arc::new(PgProbe::new(Arc::new(pool)));
    let state = AppState::new(db_probe);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped; in-memory link state discarded");

    Ok(())
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
    }
}
