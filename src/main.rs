//! booking-directory server entry point.
//!
//! Opens the database, applies migrations and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use booking_directory::api;
use booking_directory::app_state::AppState;
use booking_directory::config::{DirectoryConfig, LogFormat};
use booking_directory::domain::SystemClock;
use booking_directory::persistence::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = DirectoryConfig::from_env()
        .map_err(|err| anyhow::anyhow!(err))
        .context("invalid configuration")?;

    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting booking-directory");

    // Persistence
    let db = Database::connect(&config)
        .await
        .context("failed to open database")?;
    if config.run_migrations {
        db.migrate().await.context("failed to apply migrations")?;
    }

    // Services and router
    let app_state = AppState::new(db, Arc::new(SystemClock));
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )));
    let app = api::build_router().layer(middleware).with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
