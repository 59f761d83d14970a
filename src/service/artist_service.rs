//! Artist service.

use std::sync::Arc;

use crate::domain::{
    Artist, ArtistDetail, ArtistDraft, ArtistId, ArtistSummary, Clock, EntityKind,
    SearchResults, ShowSchedule,
};
use crate::error::DirectoryError;
use crate::persistence::{Database, artists, search, shows};

/// Orchestration layer for artist reads and mutations.
#[derive(Debug, Clone)]
pub struct ArtistService {
    db: Database,
    clock: Arc<dyn Clock>,
}

impl ArtistService {
    /// Creates a new `ArtistService`.
    #[must_use]
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// Every artist's id and name, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on database failure.
    pub async fn list(&self) -> Result<Vec<ArtistSummary>, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        artists::list(&mut conn).await
    }

    /// Artists whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on database failure.
    pub async fn search(&self, term: &str) -> Result<SearchResults, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        let hits = search::search_by_name(&mut conn, EntityKind::Artist, term, self.clock.now())
            .await?;
        tracing::debug!(term, hits = hits.len(), "artist search");
        Ok(SearchResults::from(hits))
    }

    /// Loads one artist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no artist has this id.
    pub async fn get(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        artists::find(&mut conn, id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Artist, id))
    }

    /// Artist profile with past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no artist has this id.
    pub async fn detail(&self, id: ArtistId) -> Result<ArtistDetail, DirectoryError> {
        let mut conn = self.db.acquire().await?;
        let artist = artists::find(&mut conn, id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Artist, id))?;
        let booked = shows::for_artist(&mut conn, id).await?;
        Ok(ArtistDetail {
            artist,
            shows: ShowSchedule::split(booked, self.clock.now()),
        })
    }

    /// Validates and inserts an artist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] for an invalid draft, or a
    /// [`DirectoryError`] if the insert fails.
    pub async fn create(&self, draft: ArtistDraft) -> Result<Artist, DirectoryError> {
        let draft = match draft.normalized() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!(error = %err, "artist creation rejected");
                return Err(err);
            }
        };
        let mut uow = self.db.begin().await?;
        let result = artists::insert(uow.conn(), &draft).await;
        match uow.finish(result).await {
            Ok(id) => {
                tracing::info!(artist_id = %id, name = %draft.name, "artist created");
                Ok(Artist { id, details: draft })
            }
            Err(err) => {
                tracing::warn!(name = %draft.name, error = %err, "artist creation rolled back");
                Err(err)
            }
        }
    }

    /// Replaces every editable field of an existing artist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] for an unknown id,
    /// [`DirectoryError::Validation`] for an invalid draft, or a
    /// [`DirectoryError`] if the update fails.
    pub async fn update(&self, id: ArtistId, draft: ArtistDraft) -> Result<Artist, DirectoryError> {
        let draft = match draft.normalized() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!(artist_id = %id, error = %err, "artist update rejected");
                return Err(err);
            }
        };
        let mut uow = self.db.begin().await?;
        let result = match artists::update(uow.conn(), id, &draft).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(DirectoryError::not_found(EntityKind::Artist, id)),
            Err(err) => Err(err),
        };
        match uow.finish(result).await {
            Ok(()) => {
                tracing::info!(artist_id = %id, "artist updated");
                Ok(Artist { id, details: draft })
            }
            Err(err) => {
                tracing::warn!(artist_id = %id, error = %err, "artist update rolled back");
                Err(err)
            }
        }
    }

    /// Deletes an artist and its shows. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] if the delete fails.
    pub async fn delete(&self, id: ArtistId) -> Result<bool, DirectoryError> {
        let mut uow = self.db.begin().await?;
        let result = artists::delete(uow.conn(), id).await;
        match uow.finish(result).await {
            Ok(removed) => {
                tracing::info!(artist_id = %id, removed, "artist deleted");
                Ok(removed)
            }
            Err(err) => {
                tracing::warn!(artist_id = %id, error = %err, "artist deletion rolled back");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::domain::{FixedClock, NewShow, VenueDraft};
    use crate::persistence::venues;
    use crate::service::log_capture::CapturedLogs;

    fn noon() -> NaiveDateTime {
        let Some(at) = NaiveDate::from_ymd_opt(2035, 4, 1).and_then(|d| d.and_hms_opt(12, 0, 0))
        else {
            panic!("valid date");
        };
        at
    }

    fn draft(name: &str) -> ArtistDraft {
        ArtistDraft {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            ..ArtistDraft::default()
        }
    }

    async fn make_service() -> (ArtistService, Database) {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        (
            ArtistService::new(db.clone(), Arc::new(FixedClock(noon()))),
            db,
        )
    }

    #[tokio::test]
    async fn detail_lists_venues_as_counterparts() {
        let (service, db) = make_service().await;
        let Ok(artist) = service.create(draft("Guns N Petals")).await else {
            panic!("create failed");
        };
        {
            let Ok(mut conn) = db.acquire().await else {
                panic!("acquire failed");
            };
            let venue = VenueDraft {
                name: "The Musical Hop".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                ..VenueDraft::default()
            };
            let Ok(venue_id) = venues::insert(&mut conn, &venue).await else {
                panic!("venue insert failed");
            };
            for offset in [-1, 1] {
                let show = NewShow {
                    venue_id,
                    artist_id: artist.id,
                    start_time: noon() + Duration::hours(offset),
                };
                assert_ok!(shows::insert(&mut conn, &show).await);
            }
        }

        let Ok(detail) = service.detail(artist.id).await else {
            panic!("detail failed");
        };
        assert_eq!(detail.shows.past.len(), 1);
        let [upcoming] = detail.shows.upcoming.as_slice() else {
            panic!("expected one upcoming show");
        };
        assert_eq!(upcoming.name, "The Musical Hop");
    }

    #[tokio::test]
    async fn update_moves_artist_and_reads_seeking_flag() {
        let (service, _db) = make_service().await;
        let Ok(artist) = service.create(draft("Matt Quevedo")).await else {
            panic!("create failed");
        };
        let moved = ArtistDraft {
            city: "New York".to_string(),
            state: "NY".to_string(),
            seeking_venue: true,
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
            ..draft("Matt Quevedo")
        };
        assert_ok!(service.update(artist.id, moved).await);
        let Ok(stored) = service.get(artist.id).await else {
            panic!("get failed");
        };
        assert_eq!(stored.details.state, "NY");
        assert!(stored.details.seeking_venue);
    }

    #[tokio::test]
    async fn rejected_drafts_are_logged_as_warnings() {
        let (service, _db) = make_service().await;
        let Ok(artist) = service.create(draft("Matt Quevedo")).await else {
            panic!("create failed");
        };
        let (logs, _guard) = CapturedLogs::install();
        assert_err!(service.create(draft("   ")).await);
        let homeless = ArtistDraft {
            state: String::new(),
            ..draft("Matt Quevedo")
        };
        assert_err!(service.update(artist.id, homeless).await);

        let output = logs.contents();
        let warnings: Vec<&str> = output.lines().filter(|l| l.contains("WARN")).collect();
        assert!(
            warnings.iter().any(|l| l.contains("artist creation rejected")),
            "{output}"
        );
        assert!(
            warnings.iter().any(|l| l.contains("artist update rejected")),
            "{output}"
        );
    }

    #[tokio::test]
    async fn delete_then_lookup_is_not_found() {
        let (service, _db) = make_service().await;
        let Ok(artist) = service.create(draft("The Wild Sax Band")).await else {
            panic!("create failed");
        };
        assert!(matches!(service.delete(artist.id).await, Ok(true)));
        assert!(matches!(service.delete(artist.id).await, Ok(false)));
        assert!(matches!(
            service.get(artist.id).await,
            Err(DirectoryError::NotFound { .. })
        ));
        assert!(matches!(service.list().await, Ok(list) if list.is_empty()));
    }
}
