//! Server startup and shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use lektyr_core::BookStore;
use lektyr_store::{JsonFileStore, MemoryStore};

use crate::config::ApiConfig;
use crate::routes;
use crate::state::AppState;

/// Runs the API server until interrupted.
///
/// Picks the backend from the configuration: a JSON file when
/// `data_path` is set, otherwise an in-memory catalog that is lost on
/// exit.
pub async fn serve(config: ApiConfig) -> anyhow::Result<()> {
    let store: Arc<dyn BookStore> = match &config.data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "opening catalog");
            Arc::new(
                JsonFileStore::open(path.clone())
                    .await
                    .with_context(|| format!("failed to open catalog at {}", path.display()))?,
            )
        }
        None => {
            tracing::warn!("no data_path configured; catalog changes will not be persisted");
            Arc::new(MemoryStore::new())
        }
    };

    let bind = config.bind.clone();
    let app = routes::router(AppState::new(store, config));

    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down cleanly");
    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!("failed to install SIGTERM handler: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C"),
        _ = terminate => tracing::info!("received SIGTERM"),
    }
}
