//! Queries over the `artists` table.

use sqlx::SqliteConnection;

use super::models::ArtistRow;
use crate::domain::{Artist, ArtistDraft, ArtistId, ArtistSummary, fold_name};
use crate::error::DirectoryError;

/// Inserts an artist and returns its new id.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn insert(
    conn: &mut SqliteConnection,
    draft: &ArtistDraft,
) -> Result<ArtistId, DirectoryError> {
    let genres = draft.genres.to_json()?;
    let id = sqlx::query_scalar::<_, ArtistId>(
        "INSERT INTO artists (name, name_folded, city, state, phone, image_link, \
         facebook_link, website, genres, seeking_venue, seeking_description) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) RETURNING id",
    )
    .bind(&draft.name)
    .bind(fold_name(&draft.name))
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.phone)
    .bind(&draft.image_link)
    .bind(&draft.facebook_link)
    .bind(&draft.website)
    .bind(genres)
    .bind(draft.seeking_venue)
    .bind(&draft.seeking_description)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

/// Loads one artist, or `None` if the id is unknown.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure or undecodable genres.
pub async fn find(
    conn: &mut SqliteConnection,
    id: ArtistId,
) -> Result<Option<Artist>, DirectoryError> {
    let row = sqlx::query_as::<_, ArtistRow>(
        "SELECT id, name, city, state, phone, image_link, facebook_link, website, genres, \
         seeking_venue, seeking_description FROM artists WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    row.map(Artist::try_from).transpose()
}

/// Returns `true` if an artist with this id exists.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn exists(conn: &mut SqliteConnection, id: ArtistId) -> Result<bool, DirectoryError> {
    let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM artists WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

/// Overwrites every editable field, `city` and `state` included.
///
/// Returns `false` if no artist has this id.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn update(
    conn: &mut SqliteConnection,
    id: ArtistId,
    draft: &ArtistDraft,
) -> Result<bool, DirectoryError> {
    let genres = draft.genres.to_json()?;
    let result = sqlx::query(
        "UPDATE artists SET name = ?1, name_folded = ?2, city = ?3, state = ?4, phone = ?5, \
         image_link = ?6, facebook_link = ?7, website = ?8, genres = ?9, seeking_venue = ?10, \
         seeking_description = ?11 WHERE id = ?12",
    )
    .bind(&draft.name)
    .bind(fold_name(&draft.name))
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.phone)
    .bind(&draft.image_link)
    .bind(&draft.facebook_link)
    .bind(&draft.website)
    .bind(genres)
    .bind(draft.seeking_venue)
    .bind(&draft.seeking_description)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Deletes an artist together with its shows.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn delete(conn: &mut SqliteConnection, id: ArtistId) -> Result<bool, DirectoryError> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Lists id and name of every artist, ordered by id.
///
/// # Errors
///
/// Returns a [`DirectoryError`] on database failure.
pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<ArtistSummary>, DirectoryError> {
    let rows = sqlx::query_as::<_, (ArtistId, String)>("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistSummary { id, name })
        .collect())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Genres;
    use crate::persistence::Database;

    fn petals() -> ArtistDraft {
        ArtistDraft {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            genres: Genres::new(["Rock n Roll"]),
            seeking_venue: true,
            seeking_description: Some("Looking for shows in the Bay Area".to_string()),
            ..ArtistDraft::default()
        }
    }

    #[tokio::test]
    async fn update_changes_city_and_state() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        let Ok(id) = insert(&mut conn, &petals()).await else {
            panic!("insert failed");
        };
        let moved = ArtistDraft {
            city: "New York".to_string(),
            state: "NY".to_string(),
            seeking_venue: false,
            ..petals()
        };
        assert!(matches!(update(&mut conn, id, &moved).await, Ok(true)));
        let Ok(Some(artist)) = find(&mut conn, id).await else {
            panic!("artist missing");
        };
        assert_eq!(artist.details, moved);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        for name in ["Matt Quevedo", "The Wild Sax Band"] {
            let draft = ArtistDraft {
                name: name.to_string(),
                ..petals()
            };
            assert!(insert(&mut conn, &draft).await.is_ok());
        }
        let Ok(artists) = list(&mut conn).await else {
            panic!("list failed");
        };
        let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Matt Quevedo", "The Wild Sax Band"]);
        let ids: Vec<ArtistId> = artists.iter().map(|a| a.id).collect();
        assert!(ids.windows(2).all(|w| matches!(w, [a, b] if a < b)));
    }
}
