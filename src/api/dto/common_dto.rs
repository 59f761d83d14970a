//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EntityKind, SearchHit, SearchResults};

/// Form body for `POST /venues/search` and `POST /artists/search`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchForm {
    /// Substring to look for. Missing or empty matches every name.
    #[serde(default)]
    pub search_term: String,
}

/// One search match.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchHitDto {
    /// Venue or artist id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Shows starting after now.
    pub num_upcoming_shows: i64,
}

impl From<SearchHit> for SearchHitDto {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.id,
            name: hit.name,
            num_upcoming_shows: hit.num_upcoming_shows,
        }
    }
}

/// Response body for the search endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResponse {
    /// The term that was searched for.
    pub search_term: String,
    /// Number of matches.
    pub count: usize,
    /// Matches ordered by id.
    pub data: Vec<SearchHitDto>,
}

impl SearchResponse {
    /// Wraps service results together with the submitted term.
    #[must_use]
    pub fn new(search_term: String, results: SearchResults) -> Self {
        Self {
            search_term,
            count: results.count,
            data: results.data.into_iter().map(SearchHitDto::from).collect(),
        }
    }
}

/// Outcome of a create or update, shown to the user as a flash message.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Notification {
    /// Always `"success"`; failures are reported as error bodies.
    pub status: String,
    /// Human-readable message.
    pub message: String,
    /// Id of the created or updated record.
    pub id: i64,
}

impl Notification {
    /// Notification for a newly listed venue, artist or show.
    #[must_use]
    pub fn listed(kind: EntityKind, name: &str, id: i64) -> Self {
        let message = if name.is_empty() {
            format!("{} was successfully listed!", kind.label())
        } else {
            format!("{} {name} was successfully listed!", kind.label())
        };
        Self {
            status: "success".to_string(),
            message,
            id,
        }
    }

    /// Notification for an edited venue or artist.
    #[must_use]
    pub fn updated(kind: EntityKind, name: &str, id: i64) -> Self {
        Self {
            status: "success".to_string(),
            message: format!("{} {name} was successfully updated!", kind.label()),
            id,
        }
    }
}

/// A navigation link on the landing document.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LinkDto {
    /// Link relation.
    pub rel: String,
    /// Target path.
    pub href: String,
}

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LandingResponse {
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
    /// Top-level navigation.
    pub links: Vec<LinkDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_message_names_the_record() {
        let note = Notification::listed(EntityKind::Venue, "The Musical Hop", 1);
        assert_eq!(note.message, "Venue The Musical Hop was successfully listed!");
        assert_eq!(note.status, "success");
    }

    #[test]
    fn show_notification_has_no_name() {
        let note = Notification::listed(EntityKind::Show, "", 3);
        assert_eq!(note.message, "Show was successfully listed!");
    }
}
