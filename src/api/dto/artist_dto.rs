//! Artist DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::genres::deserialize_list;
use crate::domain::seeking::deserialize_flag;
use crate::domain::show::format_start_time;
use crate::domain::{Artist, ArtistDetail, ArtistDraft, ArtistSummary, Genres, ShowCounterpart};

/// Submission body for `POST /artists/create` and `POST /artists/{id}/edit`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ArtistForm {
    /// Display name (required).
    #[serde(default)]
    pub name: String,
    /// Home city (required).
    #[serde(default)]
    pub city: String,
    /// Home state (required).
    #[serde(default)]
    pub state: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Image link.
    #[serde(default)]
    pub image_link: Option<String>,
    /// Facebook page.
    #[serde(default)]
    pub facebook_link: Option<String>,
    /// Website.
    #[serde(default)]
    pub website: Option<String>,
    /// Genres, comma-separated text or a JSON array.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub genres: Vec<String>,
    /// `"Yes"` or JSON `true` when the artist is looking for venues.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub seeking_venue: bool,
    /// What the artist is looking for.
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl From<ArtistForm> for ArtistDraft {
    fn from(form: ArtistForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            phone: form.phone,
            image_link: form.image_link,
            facebook_link: form.facebook_link,
            website: form.website,
            genres: Genres::new(form.genres),
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description,
        }
    }
}

/// An artist's stored fields.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct ArtistDto {
    /// Artist id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Genres in submission order.
    pub genres: Vec<String>,
    /// Whether the artist is looking for venues.
    pub seeking_venue: bool,
    /// What the artist is looking for.
    pub seeking_description: Option<String>,
}

impl From<Artist> for ArtistDto {
    fn from(artist: Artist) -> Self {
        let d = artist.details;
        Self {
            id: artist.id.get(),
            name: d.name,
            city: d.city,
            state: d.state,
            phone: d.phone,
            image_link: d.image_link,
            facebook_link: d.facebook_link,
            website: d.website,
            genres: d.genres.into(),
            seeking_venue: d.seeking_venue,
            seeking_description: d.seeking_description,
        }
    }
}

/// Form document for `GET /artists/create` and `GET /artists/{id}/edit`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistFormDocument {
    /// Path the form posts to.
    pub action: String,
    /// Current values; empty for a new artist.
    pub values: ArtistDto,
}

impl ArtistFormDocument {
    /// Blank form for a new artist.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            action: "/artists/create".to_string(),
            values: ArtistDto::default(),
        }
    }

    /// Form prefilled with an existing artist.
    #[must_use]
    pub fn prefilled(artist: Artist) -> Self {
        Self {
            action: format!("/artists/{}/edit", artist.id),
            values: ArtistDto::from(artist),
        }
    }
}

/// Entry of the artist index.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistSummaryDto {
    /// Artist id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl From<ArtistSummary> for ArtistSummaryDto {
    fn from(summary: ArtistSummary) -> Self {
        Self {
            id: summary.id.get(),
            name: summary.name,
        }
    }
}

/// A venue the artist plays, as listed on the artist profile.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistShowDto {
    /// Hosting venue.
    pub venue_id: i64,
    /// Venue name.
    pub venue_name: String,
    /// Venue image.
    pub venue_image_link: Option<String>,
    /// Start time, `YYYY-MM-DDTHH:MM:SS`.
    pub start_time: String,
}

impl From<ShowCounterpart> for ArtistShowDto {
    fn from(show: ShowCounterpart) -> Self {
        Self {
            venue_id: show.id,
            venue_name: show.name,
            venue_image_link: show.image_link,
            start_time: format_start_time(show.start_time),
        }
    }
}

/// Response body for `GET /artists/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistDetailResponse {
    /// The artist's fields.
    #[serde(flatten)]
    pub artist: ArtistDto,
    /// Shows that started before now.
    pub past_shows: Vec<ArtistShowDto>,
    /// Shows starting after now.
    pub upcoming_shows: Vec<ArtistShowDto>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl From<ArtistDetail> for ArtistDetailResponse {
    fn from(detail: ArtistDetail) -> Self {
        let past_shows: Vec<ArtistShowDto> = detail
            .shows
            .past
            .into_iter()
            .map(ArtistShowDto::from)
            .collect();
        let upcoming_shows: Vec<ArtistShowDto> = detail
            .shows
            .upcoming
            .into_iter()
            .map(ArtistShowDto::from)
            .collect();
        Self {
            artist: ArtistDto::from(detail.artist),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
