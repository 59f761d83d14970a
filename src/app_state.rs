//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::Clock;
use crate::persistence::Database;
use crate::service::{ArtistService, ShowService, VenueService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Venue directory, search, profiles and mutations.
    pub venues: Arc<VenueService>,
    /// Artist index, search, profiles and mutations.
    pub artists: Arc<ArtistService>,
    /// Show index and booking.
    pub shows: Arc<ShowService>,
    /// Database handle, used by the health probe.
    pub db: Database,
}

impl AppState {
    /// Builds every service over one database and one clock.
    #[must_use]
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        Self {
            venues: Arc::new(VenueService::new(db.clone(), Arc::clone(&clock))),
            artists: Arc::new(ArtistService::new(db.clone(), Arc::clone(&clock))),
            shows: Arc::new(ShowService::new(db.clone(), clock)),
            db,
        }
    }
}
