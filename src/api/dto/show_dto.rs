//! Show DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::show::{format_start_time, parse_start_time};
use crate::domain::{ArtistId, NewShow, ShowListing, VenueId};
use crate::error::DirectoryError;

/// Submission body for `POST /shows/create`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ShowForm {
    /// Hosting venue id.
    pub venue_id: i64,
    /// Performing artist id.
    pub artist_id: i64,
    /// Start, `YYYY-MM-DD HH:MM[:SS]` with a space or `T`.
    pub start_time: String,
}

impl TryFrom<ShowForm> for NewShow {
    type Error = DirectoryError;

    fn try_from(form: ShowForm) -> Result<Self, Self::Error> {
        Ok(Self {
            venue_id: VenueId::new(form.venue_id),
            artist_id: ArtistId::new(form.artist_id),
            start_time: parse_start_time(&form.start_time)?,
        })
    }
}

/// A show in the show index.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowDto {
    /// Show id.
    pub id: i64,
    /// Hosting venue.
    pub venue_id: i64,
    /// Venue name.
    pub venue_name: String,
    /// Performing artist.
    pub artist_id: i64,
    /// Artist name.
    pub artist_name: String,
    /// Artist image.
    pub artist_image_link: Option<String>,
    /// Start time, `YYYY-MM-DDTHH:MM:SS`.
    pub start_time: String,
}

impl From<ShowListing> for ShowDto {
    fn from(show: ShowListing) -> Self {
        Self {
            id: show.show_id.get(),
            venue_id: show.venue_id.get(),
            venue_name: show.venue_name,
            artist_id: show.artist_id.get(),
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_start_time(show.start_time),
        }
    }
}

/// Default values of the booking form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowFormValues {
    /// Hosting venue; chosen by the user.
    pub venue_id: Option<i64>,
    /// Performing artist; chosen by the user.
    pub artist_id: Option<i64>,
    /// Start time, defaulted to now.
    pub start_time: String,
}

/// Form document for `GET /shows/create`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowFormDocument {
    /// Path the form posts to.
    pub action: String,
    /// Prefilled values.
    pub values: ShowFormValues,
}

impl ShowFormDocument {
    /// Blank booking form starting at `now`.
    #[must_use]
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            action: "/shows/create".to_string(),
            values: ShowFormValues {
                venue_id: None,
                artist_id: None,
                start_time: format_start_time(now),
            },
        }
    }
}
