//! Shows: a booking of one artist at one venue at a given time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{ArtistId, ShowId, VenueId};
use crate::error::DirectoryError;

/// Format used when rendering a show's start time to callers.
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats accepted from show submissions, tried in order.
const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A persisted show. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Store-assigned id.
    pub id: ShowId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Scheduled start, UTC wall clock.
    pub start_time: NaiveDateTime,
}

/// Values for a show about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    /// Hosting venue; must exist.
    pub venue_id: VenueId,
    /// Performing artist; must exist.
    pub artist_id: ArtistId,
    /// Scheduled start.
    pub start_time: NaiveDateTime,
}

/// Where a show sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    /// Started strictly before now.
    Past,
    /// Starts strictly after now.
    Upcoming,
}

impl ShowTiming {
    /// Classifies `start` against `now`.
    ///
    /// Both comparisons are exclusive: a show starting exactly at `now` is
    /// neither past nor upcoming and yields `None`.
    #[must_use]
    pub fn classify(start: NaiveDateTime, now: NaiveDateTime) -> Option<Self> {
        if start < now {
            Some(Self::Past)
        } else if start > now {
            Some(Self::Upcoming)
        } else {
            None
        }
    }
}

/// Parses a submitted start time (`YYYY-MM-DD HH:MM[:SS]`, space or `T`).
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] when no accepted format matches.
pub fn parse_start_time(raw: &str) -> Result<NaiveDateTime, DirectoryError> {
    let raw = raw.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| DirectoryError::Validation(format!("invalid start_time: {raw:?}")))
}

/// Renders a start time as `YYYY-MM-DDTHH:MM:SS`.
#[must_use]
pub fn format_start_time(start: NaiveDateTime) -> String {
    start.format(START_TIME_FORMAT).to_string()
}

/// A show seen from one side of the booking: the other entity's display
/// fields plus the start time.
///
/// On a venue page the counterpart is the artist, on an artist page the
/// venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowCounterpart {
    /// The show itself.
    pub show_id: ShowId,
    /// Id of the artist (venue page) or venue (artist page).
    pub id: i64,
    /// Display name of the counterpart.
    pub name: String,
    /// Image of the counterpart.
    pub image_link: Option<String>,
    /// Scheduled start.
    pub start_time: NaiveDateTime,
}

/// Shows of one venue or artist split around "now".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowSchedule {
    /// Shows that started strictly before now.
    pub past: Vec<ShowCounterpart>,
    /// Shows starting strictly after now.
    pub upcoming: Vec<ShowCounterpart>,
}

impl ShowSchedule {
    /// Buckets `shows` by [`ShowTiming::classify`], keeping input order.
    ///
    /// A show starting exactly at `now` is dropped from both buckets.
    #[must_use]
    pub fn split(shows: Vec<ShowCounterpart>, now: NaiveDateTime) -> Self {
        let mut schedule = Self::default();
        for show in shows {
            match ShowTiming::classify(show.start_time, now) {
                Some(ShowTiming::Past) => schedule.past.push(show),
                Some(ShowTiming::Upcoming) => schedule.upcoming.push(show),
                None => {}
            }
        }
        schedule
    }
}

/// A show joined with the display fields of both sides, for the show index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    /// Show id.
    pub show_id: ShowId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue display name.
    pub venue_name: String,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist display name.
    pub artist_name: String,
    /// Artist image.
    pub artist_image_link: Option<String>,
    /// Scheduled start.
    pub start_time: NaiveDateTime,
}
