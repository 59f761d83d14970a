//! Venue service: directory, search, profiles and venue mutations.

use std::sync::Arc;

use crate::domain::{
    Area, Clock, EntityKind, SearchResults, ShowSchedule, Venue, VenueDetail, VenueDraft,
    VenueId, group_by_area,
};
use crate::error::DirectoryError;
use crate::persistence::{Database, search, shows, venues};

/// Orchestration layer for everything venue-shaped.
///
/// Reads borrow one pooled connection. Each mutation runs in its own
/// [`crate::persistence::UnitOfWork`] and is rolled back if any step
/// fails.
#[derive(Debug, Clone)]
pub struct VenueService {
    db: Database,
    clock: Arc<dyn Clock>,
}

impl VenueService {
    /// Creates a new `VenueService`.
    #[must_use]
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// All venues grouped by (city, state), each with its upcoming-show
    /// count.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on database failure.
    pub async fn list_areas(&self) -> Result<Vec<Area>, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        let listings = venues::list_with_upcoming(&mut conn, self.clock.now()).await?;
        tracing::debug!(venues = listings.len(), "venue directory loaded");
        Ok(group_by_area(listings))
    }

    /// Venues whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on database failure.
    pub async fn search(&self, term: &str) -> Result<SearchResults, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        let hits = search::search_by_name(&mut conn, EntityKind::Venue, term, self.clock.now())
            .await?;
        tracing::debug!(term, hits = hits.len(), "venue search");
        Ok(SearchResults::from(hits))
    }

    /// Loads one venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no venue has this id.
    pub async fn get(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        venues::find(&mut conn, id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Venue, id))
    }

    /// Venue profile with its shows split into past and upcoming.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no venue has this id.
    pub async fn detail(&self, id: VenueId) -> Result<VenueDetail, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        let venue = venues::find(&mut conn, id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Venue, id))?;
        let booked = shows::for_venue(&mut conn, id).await?;
        Ok(VenueDetail {
            venue,
            shows: ShowSchedule::split(booked, self.clock.now()),
        })
    }

    /// Validates and inserts a venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] for an invalid draft, or a
    /// [`DirectoryError`] if the insert fails.
    pub async fn create(&self, draft: VenueDraft) -> Result<Venue, DirectoryError> {
        let draft = match draft.normalized() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!(error = %err, "venue creation rejected");
                return Err(err);
            }
        };
        let mut uow = self.db.begin().await?;
        let result = venues::insert(uow.conn(), &draft).await;
        match uow.finish(result).await {
            Ok(id) => {
                tracing::info!(venue_id = %id, name = %draft.name, "venue created");
                Ok(Venue { id, details: draft })
            }
            Err(err) => {
                tracing::warn!(name = %draft.name, error = %err, "venue creation rolled back");
                Err(err)
            }
        }
    }

    /// Replaces every editable field of an existing venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] for an unknown id,
    /// [`DirectoryError::Validation`] for an invalid draft, or a
    /// [`DirectoryError`] if the update fails.
    pub async fn update(&self, id: VenueId, draft: VenueDraft) -> Result<Venue, DirectoryError> {
        let draft = match draft.normalized() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!(venue_id = %id, error = %err, "venue update rejected");
                return Err(err);
            }
        };
        let mut uow = self.db.begin().await?;
        let result = match venues::update(uow.conn(), id, &draft).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(DirectoryError::not_found(EntityKind::Venue, id)),
            Err(err) => Err(err),
        };
        match uow.finish(result).await {
            Ok(()) => {
                tracing::info!(venue_id = %id, "venue updated");
                Ok(Venue { id, details: draft })
            }
            Err(err) => {
                tracing::warn!(venue_id = %id, error = %err, "venue update rolled back");
                Err(err)
            }
        }
    }

    /// Deletes a venue and its shows. Deleting an unknown id succeeds.
    ///
    /// Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] if the delete fails.
    pub async fn delete(&self, id: VenueId) -> Result<bool, DirectoryError> {
        let mut uow = self.db.begin().await?;
        let result = venues::delete(uow.conn(), id).await;
        match uow.finish(result).await {
            Ok(removed) => {
                tracing::info!(venue_id = %id, removed, "venue deleted");
                Ok(removed)
            }
            Err(err) => {
                tracing::warn!(venue_id = %id, error = %err, "venue deletion rolled back");
                Err(err)
            }
        }
    }
}
