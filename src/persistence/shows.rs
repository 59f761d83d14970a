//! Queries over the `shows` table and its joins.

use sqlx::SqliteConnection;

use super::models::{CounterpartRow, ShowListingRow};
use crate::domain::{ArtistId, NewShow, Show, ShowCounterpart, ShowId, ShowListing, VenueId};
use crate::error::DirectoryError;

/// Inserts a show.
///
/// # Errors
///
/// Returns [`DirectoryError::ReferentialIntegrity`] if the venue or
/// artist row is missing, or another [`DirectoryError`] on database
/// failure.
pub async fn insert(conn: &mut SqliteConnection, show: &NewShow) -> Result<Show, DirectoryError> {
    let id = sqlx::query_scalar::<_, ShowId>(
        "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(show.venue_id)
    .bind(show.artist_id)
    .bind(show.start_time)
    .fetch_one(&mut *conn)
    .await?;

    Ok(Show {
        id,
        venue_id: show.venue_id,
        artist_id: show.artist_id,
        start_time: show.start_time,
    })
}

/// Lists every show with venue and artist display fields, ordered by
/// start time then id.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<ShowListing>, DirectoryError> {
    let rows = sqlx::query_as::<_, ShowListingRow>(
        "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name, s.artist_id, \
         a.name AS artist_name, a.image_link AS artist_image_link, s.start_time \
         FROM shows s \
         JOIN venues v ON v.id = s.venue_id \
         JOIN artists a ON a.id = s.artist_id \
         ORDER BY s.start_time, s.id",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(ShowListing::from).collect())
}

/// Shows of one venue, each joined with its artist.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn for_venue(
    conn: &mut SqliteConnection,
    venue_id: VenueId,
) -> Result<Vec<ShowCounterpart>, DirectoryError> {
    let rows = sqlx::query_as::<_, CounterpartRow>(
        "SELECT s.id AS show_id, s.start_time, a.id AS counterpart_id, \
         a.name AS counterpart_name, a.image_link AS counterpart_image_link \
         FROM shows s JOIN artists a ON a.id = s.artist_id \
         WHERE s.venue_id = ?1 ORDER BY s.start_time, s.id",
    )
    .bind(venue_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(ShowCounterpart::from).collect())
}

/// Shows of one artist, each joined with its venue.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn for_artist(
    conn: &mut SqliteConnection,
    artist_id: ArtistId,
) -> Result<Vec<ShowCounterpart>, DirectoryError> {
    let rows = sqlx::query_as::<_, CounterpartRow>(
        "SELECT s.id AS show_id, s.start_time, v.id AS counterpart_id, \
         v.name AS counterpart_name, v.image_link AS counterpart_image_link \
         FROM shows s JOIN venues v ON v.id = s.venue_id \
         WHERE s.artist_id = ?1 ORDER BY s.start_time, s.id",
    )
    .bind(artist_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(ShowCounterpart::from).collect())
}
