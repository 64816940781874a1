// Receipt Points - Web Server
// Holds scores in memory for the lifetime of the process

use anyhow::{Context, Result};
use clap::Parser;
use receipt_points::api::{create_app, AppState};
use receipt_points::config::{init_tracing, ServerConfig};
use receipt_points::ScoreStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_tracing(config.log_json);

    // One store for the whole process, shared by every handler
    let state = AppState::new(Arc::new(ScoreStore::new()));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        addr = %config.bind,
        version = receipt_points::VERSION,
        "receipt server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error")?;

    info!("receipt server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
