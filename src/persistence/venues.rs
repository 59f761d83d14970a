//! Queries over the `venues` table.

use chrono::NaiveDateTime;
use sqlx::SqliteConnection;

use super::models::VenueRow;
use crate::domain::{Venue, VenueDraft, VenueId, VenueListing, fold_name};
use crate::error::DirectoryError;

const SELECT_VENUE: &str = "SELECT id, name, city, state, address, phone, image_link, \
     facebook_link, website, genres, seeking_talent, seeking_description \
     FROM venues WHERE id = ?1";

/// Inserts a venue and returns its new id.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn insert(
    conn: &mut SqliteConnection,
    draft: &VenueDraft,
) -> Result<VenueId, DirectoryError> {
    let genres = draft.genres.to_json()?;
    let id = sqlx::query_scalar::<_, VenueId>(
        "INSERT INTO venues (name, name_folded, city, state, address, phone, image_link, \
         facebook_link, website, genres, seeking_talent, seeking_description) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12) RETURNING id",
    )
    .bind(&draft.name)
    .bind(fold_name(&draft.name))
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.address)
    .bind(&draft.phone)
    .bind(&draft.image_link)
    .bind(&draft.facebook_link)
    .bind(&draft.website)
    .bind(genres)
    .bind(draft.seeking_talent)
    .bind(&draft.seeking_description)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

/// Loads one venue, or `None` if the id is unknown.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure or undecodable genres.
pub async fn find(
    conn: &mut SqliteConnection,
    id: VenueId,
) -> Result<Option<Venue>, DirectoryError> {
    let row = sqlx::query_as::<_, VenueRow>(SELECT_VENUE)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.map(Venue::try_from).transpose()
}

/// Returns `true` if a venue with this id exists.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn exists(conn: &mut SqliteConnection, id: VenueId) -> Result<bool, DirectoryError> {
    let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM venues WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

/// Overwrites every editable field of a venue. The id is never changed.
///
/// Returns `false` if no venue has this id.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn update(
    conn: &mut SqliteConnection,
    id: VenueId,
    draft: &VenueDraft,
) -> Result<bool, DirectoryError> {
    let genres = draft.genres.to_json()?;
    let result = sqlx::query(
        "UPDATE venues SET name = ?1, name_folded = ?2, city = ?3, state = ?4, address = ?5, \
         phone = ?6, image_link = ?7, facebook_link = ?8, website = ?9, genres = ?10, \
         seeking_talent = ?11, seeking_description = ?12 WHERE id = ?13",
    )
    .bind(&draft.name)
    .bind(fold_name(&draft.name))
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.address)
    .bind(&draft.phone)
    .bind(&draft.image_link)
    .bind(&draft.facebook_link)
    .bind(&draft.website)
    .bind(genres)
    .bind(draft.seeking_talent)
    .bind(&draft.seeking_description)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Deletes a venue; its shows go with it (`ON DELETE CASCADE`).
///
/// Returns `false` if no venue had this id.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn delete(conn: &mut SqliteConnection, id: VenueId) -> Result<bool, DirectoryError> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Lists every venue with its upcoming-show count, ordered by
/// (city, state, id).
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn list_with_upcoming(
    conn: &mut SqliteConnection,
    now: NaiveDateTime,
) -> Result<Vec<VenueListing>, DirectoryError> {
    let rows = sqlx::query_as::<_, (VenueId, String, String, String, i64)>(
        "SELECT v.id, v.name, v.city, v.state, \
         (SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > ?1) \
         FROM venues v ORDER BY v.city, v.state, v.id",
    )
    .bind(now)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, city, state, num_upcoming_shows)| VenueListing {
            id,
            name,
            city,
            state,
            num_upcoming_shows,
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Genres;
    use crate::persistence::Database;

    fn hop() -> VenueDraft {
        VenueDraft {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: Some("1015 Folsom Street".to_string()),
            genres: Genres::new(["Jazz", "Reggae", "Swing"]),
            seeking_talent: true,
            ..VenueDraft::default()
        }
    }

    async fn db() -> Database {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        db
    }

    #[tokio::test]
    async fn insert_then_find_round_trips_fields() {
        let db = db().await;
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        let Ok(id) = insert(&mut conn, &hop()).await else {
            panic!("insert failed");
        };
        let Ok(Some(venue)) = find(&mut conn, id).await else {
            panic!("venue missing");
        };
        assert_eq!(venue.id, id);
        assert_eq!(venue.details, hop());
    }

    #[tokio::test]
    async fn find_unknown_is_none() {
        let db = db().await;
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        assert!(matches!(find(&mut conn, VenueId::new(99)).await, Ok(None)));
        assert!(matches!(exists(&mut conn, VenueId::new(99)).await, Ok(false)));
    }

    #[tokio::test]
    async fn update_keeps_id_and_reports_misses() {
        let db = db().await;
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        let Ok(id) = insert(&mut conn, &hop()).await else {
            panic!("insert failed");
        };
        let renamed = VenueDraft {
            name: "The Dueling Pianos Bar".to_string(),
            ..hop()
        };
        assert!(matches!(update(&mut conn, id, &renamed).await, Ok(true)));
        assert!(matches!(
            update(&mut conn, VenueId::new(99), &renamed).await,
            Ok(false)
        ));
        let Ok(Some(venue)) = find(&mut conn, id).await else {
            panic!("venue missing");
        };
        assert_eq!(venue.details.name, "The Dueling Pianos Bar");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went() {
        let db = db().await;
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        let Ok(id) = insert(&mut conn, &hop()).await else {
            panic!("insert failed");
        };
        assert!(matches!(delete(&mut conn, id).await, Ok(true)));
        assert!(matches!(delete(&mut conn, id).await, Ok(false)));
    }
}
