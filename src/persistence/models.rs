//! Database row types and their conversion into domain records.

use chrono::NaiveDateTime;

use crate::domain::{
    Artist, ArtistDraft, ArtistId, Genres, ShowCounterpart, ShowId, ShowListing, Venue,
    VenueDraft, VenueId,
};
use crate::error::DirectoryError;

/// A row from the `venues` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VenueRow {
    /// Primary key.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Facebook link.
    pub facebook_link: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// JSON array of genre names.
    pub genres: String,
    /// Seeking-talent flag.
    pub seeking_talent: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl TryFrom<VenueRow> for Venue {
    type Error = DirectoryError;

    fn try_from(row: VenueRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            details: VenueDraft {
                name: row.name,
                city: row.city,
                state: row.state,
                address: row.address,
                phone: row.phone,
                image_link: row.image_link,
                facebook_link: row.facebook_link,
                website: row.website,
                genres: Genres::from_json(&row.genres)?,
                seeking_talent: row.seeking_talent,
                seeking_description: row.seeking_description,
            },
        })
    }
}

/// A row from the `artists` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArtistRow {
    /// Primary key.
    pub id: ArtistId,
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Facebook link.
    pub facebook_link: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// JSON array of genre names.
    pub genres: String,
    /// Seeking-venue flag.
    pub seeking_venue: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl TryFrom<ArtistRow> for Artist {
    type Error = DirectoryError;

    fn try_from(row: ArtistRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            details: ArtistDraft {
                name: row.name,
                city: row.city,
                state: row.state,
                phone: row.phone,
                image_link: row.image_link,
                facebook_link: row.facebook_link,
                website: row.website,
                genres: Genres::from_json(&row.genres)?,
                seeking_venue: row.seeking_venue,
                seeking_description: row.seeking_description,
            },
        })
    }
}

/// A show joined with the display fields of the other side of the booking.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CounterpartRow {
    /// Show primary key.
    pub show_id: ShowId,
    /// Show start.
    pub start_time: NaiveDateTime,
    /// Id of the joined artist or venue.
    pub counterpart_id: i64,
    /// Name of the joined artist or venue.
    pub counterpart_name: String,
    /// Image of the joined artist or venue.
    pub counterpart_image_link: Option<String>,
}

impl From<CounterpartRow> for ShowCounterpart {
    fn from(row: CounterpartRow) -> Self {
        Self {
            show_id: row.show_id,
            id: row.counterpart_id,
            name: row.counterpart_name,
            image_link: row.counterpart_image_link,
            start_time: row.start_time,
        }
    }
}

/// A show joined with both venue and artist display fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShowListingRow {
    /// Show primary key.
    pub show_id: ShowId,
    /// Venue id.
    pub venue_id: VenueId,
    /// Venue name.
    pub venue_name: String,
    /// Artist id.
    pub artist_id: ArtistId,
    /// Artist name.
    pub artist_name: String,
    /// Artist image.
    pub artist_image_link: Option<String>,
    /// Show start.
    pub start_time: NaiveDateTime,
}

impl From<ShowListingRow> for ShowListing {
    fn from(row: ShowListingRow) -> Self {
        Self {
            show_id: row.show_id,
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        }
    }
}
