//! Show service: the show index and booking new shows.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::domain::{Clock, EntityKind, NewShow, Show, ShowListing};
use crate::error::DirectoryError;
use crate::persistence::{Database, UnitOfWork, artists, shows, venues};

/// Orchestration layer for shows. Shows are immutable once booked.
#[derive(Debug, Clone)]
pub struct ShowService {
    db: Database,
    clock: Arc<dyn Clock>,
}

impl ShowService {
    /// Creates a new `ShowService`.
    #[must_use]
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// Current time, used to prefill the booking form.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Every show with venue and artist display fields, by start time.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on database failure.
    pub async fn list(&self) -> Result<Vec<ShowListing>, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        shows::list_all(&mut conn).await
    }

    /// Books a show after checking that both sides exist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ReferentialIntegrity`] if the venue or
    /// artist is missing, with nothing written.
    pub async fn create(&self, show: NewShow) -> Result<Show, DirectoryError> {
        let mut uow = self.db.begin().await?;
        let result = Self::insert_checked(&mut uow, &show).await;
        match uow.finish(result).await {
            Ok(created) => {
                tracing::info!(
                    show_id = %created.id,
                    venue_id = %created.venue_id,
                    artist_id = %created.artist_id,
                    "show created"
                );
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(
                    venue_id = %show.venue_id,
                    artist_id = %show.artist_id,
                    error = %err,
                    "show creation rolled back"
                );
                Err(err)
            }
        }
    }

    async fn insert_checked(uow: &mut UnitOfWork, show: &NewShow) -> Result<Show, DirectoryError> {
        if !venues::exists(uow.conn(), show.venue_id).await? {
            return Err(DirectoryError::ReferentialIntegrity(format!(
                "{} {} does not exist",
                EntityKind::Venue,
                show.venue_id
            )));
        }
        if !artists::exists(uow.conn(), show.artist_id).await? {
            return Err(DirectoryError::ReferentialIntegrity(format!(
                "{} {} does not exist",
                EntityKind::Artist,
                show.artist_id
            )));
        }
        shows::insert(uow.conn(), show).await
    }
}
