//! Case-insensitive substring search over venue and artist names.

use chrono::NaiveDateTime;
use sqlx::SqliteConnection;

use crate::domain::search::{contains_pattern, fold_name};
use crate::domain::{EntityKind, SearchHit};
use crate::error::DirectoryError;

const VENUE_SEARCH: &str = "SELECT v.id, v.name, \
     (SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > ?2) \
     FROM venues v WHERE v.name_folded LIKE ?1 ESCAPE '\\' ORDER BY v.id";

const ARTIST_SEARCH: &str = "SELECT a.id, a.name, \
     (SELECT COUNT(*) FROM shows s WHERE s.artist_id = a.id AND s.start_time > ?2) \
     FROM artists a WHERE a.name_folded LIKE ?1 ESCAPE '\\' ORDER BY a.id";

/// Finds venues or artists whose name contains `term`, ignoring case,
/// each with its upcoming-show count. The term is matched as given,
/// surrounding whitespace included. An empty term matches all.
///
/// # Errors
///
/// Returns [`DirectoryError::Internal`] for [`EntityKind::Show`], which
/// has no name, or a [`DirectoryError`] on database failure.
pub async fn search_by_name(
    conn: &mut SqliteConnection,
    kind: EntityKind,
    term: &str,
    now: NaiveDateTime,
) -> Result<Vec<SearchHit>, DirectoryError> {
    let sql = match kind {
        EntityKind::Venue => VENUE_SEARCH,
        EntityKind::Artist => ARTIST_SEARCH,
        EntityKind::Show => {
            return Err(DirectoryError::Internal("shows are not searchable".to_string()));
        }
    };

    let rows = sqlx::query_as::<_, (i64, String, i64)>(sql)
        .bind(contains_pattern(&fold_name(term)))
        .bind(now)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, num_upcoming_shows)| SearchHit {
            id,
            name,
            num_upcoming_shows,
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::domain::{ArtistDraft, NewShow, VenueDraft};
    use crate::persistence::{Database, artists, shows, venues};

    fn now() -> NaiveDateTime {
        let Some(at) = NaiveDate::from_ymd_opt(2035, 4, 1).and_then(|d| d.and_hms_opt(12, 0, 0))
        else {
            panic!("valid date");
        };
        at
    }

    fn venue(name: &str) -> VenueDraft {
        VenueDraft {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            ..VenueDraft::default()
        }
    }

    #[tokio::test]
    async fn matches_substring_ignoring_case() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        for name in [
            "The Musical Hop",
            "Park Square Live Music & Coffee",
            "The Dueling Pianos Bar",
        ] {
            assert!(venues::insert(&mut conn, &venue(name)).await.is_ok());
        }

        let Ok(hits) = search_by_name(&mut conn, EntityKind::Venue, "Hop", now()).await else {
            panic!("search failed");
        };
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["The Musical Hop"]);

        let Ok(hits) = search_by_name(&mut conn, EntityKind::Venue, "MUSIC", now()).await else {
            panic!("search failed");
        };
        assert_eq!(hits.len(), 2);

        let Ok(all) = search_by_name(&mut conn, EntityKind::Venue, "", now()).await else {
            panic!("search failed");
        };
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn accented_names_match_in_any_case() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        assert!(venues::insert(&mut conn, &venue("Café Ébène")).await.is_ok());
        assert!(venues::insert(&mut conn, &venue("The Musical Hop")).await.is_ok());

        for term in ["café", "CAFÉ", "ébène", "ÉBÈNE", "fé éB"] {
            let Ok(hits) = search_by_name(&mut conn, EntityKind::Venue, term, now()).await else {
                panic!("search failed for {term}");
            };
            let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
            assert_eq!(names, ["Café Ébène"], "term {term}");
        }
    }

    #[tokio::test]
    async fn renamed_artist_is_found_by_new_name() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        let mut draft = ArtistDraft {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            ..ArtistDraft::default()
        };
        let Ok(id) = artists::insert(&mut conn, &draft).await else {
            panic!("insert failed");
        };
        draft.name = "Øresund Ensemble".to_string();
        assert!(matches!(artists::update(&mut conn, id, &draft).await, Ok(true)));

        let Ok(hits) = search_by_name(&mut conn, EntityKind::Artist, "øRESUND", now()).await
        else {
            panic!("search failed");
        };
        assert_eq!(hits.len(), 1);
        let Ok(stale) = search_by_name(&mut conn, EntityKind::Artist, "petals", now()).await
        else {
            panic!("search failed");
        };
        assert!(stale.is_empty());
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_part_of_the_term() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        assert!(venues::insert(&mut conn, &venue("The Musical Hop")).await.is_ok());
        let Ok(hits) = search_by_name(&mut conn, EntityKind::Venue, " musical ", now()).await
        else {
            panic!("search failed");
        };
        assert_eq!(hits.len(), 1);
        let Ok(hits) = search_by_name(&mut conn, EntityKind::Venue, " hop ", now()).await else {
            panic!("search failed");
        };
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn wildcards_in_term_are_literal() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        assert!(venues::insert(&mut conn, &venue("100% Jazz")).await.is_ok());
        assert!(venues::insert(&mut conn, &venue("1000 Jazz")).await.is_ok());
        let Ok(hits) = search_by_name(&mut conn, EntityKind::Venue, "100%", now()).await else {
            panic!("search failed");
        };
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn artist_hits_count_their_own_upcoming_shows() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        let artist = ArtistDraft {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            ..ArtistDraft::default()
        };
        // The artist shares id 1 with a venue that hosts nothing; counts
        // must follow artist_id.
        let (Ok(_), Ok(venue_id), Ok(artist_id)) = (
            venues::insert(&mut conn, &venue("The Musical Hop")).await,
            venues::insert(&mut conn, &venue("Park Square Live Music & Coffee")).await,
            artists::insert(&mut conn, &artist).await,
        ) else {
            panic!("seed failed");
        };
        for offset in [-2, 2, 4] {
            let show = NewShow {
                venue_id,
                artist_id,
                start_time: now() + Duration::days(offset),
            };
            assert!(shows::insert(&mut conn, &show).await.is_ok());
        }

        let Ok(hits) = search_by_name(&mut conn, EntityKind::Artist, "sax", now()).await else {
            panic!("search failed");
        };
        let [hit] = hits.as_slice() else {
            panic!("expected one hit, got {hits:?}");
        };
        assert_eq!(hit.id, artist_id.get());
        assert_eq!(hit.num_upcoming_shows, 2);
    }

    #[tokio::test]
    async fn shows_are_not_searchable() {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let Ok(mut conn) = db.acquire().await else {
            panic!("acquire failed");
        };
        assert!(search_by_name(&mut conn, EntityKind::Show, "x", now()).await.is_err());
    }
}
