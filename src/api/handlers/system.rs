//! System endpoints: landing document, health check, fallback.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::{LandingResponse, LinkDto};
use crate::app_state::AppState;
use crate::error::DirectoryError;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `"healthy"` or `"unhealthy"`.
    pub status: String,
    /// `"up"` when the database answered the probe.
    pub database: String,
    /// Current server time, RFC 3339.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
}

/// `GET /` — Landing document with navigation links.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Landing document",
    responses(
        (status = 200, description = "Service name and navigation", body = LandingResponse),
    )
)]
pub async fn landing_handler() -> impl IntoResponse {
    let link = |rel: &str, href: &str| LinkDto {
        rel: rel.to_string(),
        href: href.to_string(),
    };
    Json(LandingResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links: vec![
            link("venues", "/venues"),
            link("artists", "/artists"),
            link("shows", "/shows"),
            link("new-venue", "/venues/create"),
            link("new-artist", "/artists/create"),
            link("new-show", "/shows/create"),
        ],
    })
}

/// `GET /health` — Service and database health.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health, database reachability, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (status, label, database) = match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "up"),
        Err(err) => {
            tracing::warn!(error = %err, "database probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "down")
        }
    };
    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Fallback for unmatched paths.
pub async fn fallback_handler(uri: Uri) -> DirectoryError {
    DirectoryError::RouteNotFound(uri.path().to_string())
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/health", get(health_handler))
}
