//! Endpoint handlers organized by resource.

pub mod artist;
pub mod show;
pub mod system;
pub mod venue;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(venue::routes())
        .merge(artist::routes())
        .merge(show::routes())
}
