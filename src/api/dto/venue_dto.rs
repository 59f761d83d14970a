//! Venue DTOs for the directory, profile, form and submission endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::genres::deserialize_list;
use crate::domain::seeking::deserialize_flag;
use crate::domain::show::format_start_time;
use crate::domain::{Area, Genres, ShowCounterpart, Venue, VenueDetail, VenueDraft, VenueListing};

/// Submission body for `POST /venues/create` and `POST /venues/{id}/edit`.
///
/// `genres` may be a comma-separated string or a JSON array.
/// `seeking_talent` is true only for the exact text `"Yes"` or a JSON
/// `true`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct VenueForm {
    /// Display name (required).
    #[serde(default)]
    pub name: String,
    /// City (required).
    #[serde(default)]
    pub city: String,
    /// State (required).
    #[serde(default)]
    pub state: String,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
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
    /// Genres booked by the venue.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub genres: Vec<String>,
    /// Whether the venue is looking for talent.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub seeking_talent: bool,
    /// What the venue is looking for.
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl From<VenueForm> for VenueDraft {
    fn from(form: VenueForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: form.phone,
            image_link: form.image_link,
            facebook_link: form.facebook_link,
            website: form.website,
            genres: Genres::new(form.genres),
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
        }
    }
}

/// A venue's stored fields.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct VenueDto {
    /// Venue id.
    pub id: i64,
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
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Genres in submission order.
    pub genres: Vec<String>,
    /// Whether the venue is looking for talent.
    pub seeking_talent: bool,
    /// What the venue is looking for.
    pub seeking_description: Option<String>,
}

impl From<Venue> for VenueDto {
    fn from(venue: Venue) -> Self {
        let d = venue.details;
        Self {
            id: venue.id.get(),
            name: d.name,
            city: d.city,
            state: d.state,
            address: d.address,
            phone: d.phone,
            image_link: d.image_link,
            facebook_link: d.facebook_link,
            website: d.website,
            genres: d.genres.into(),
            seeking_talent: d.seeking_talent,
            seeking_description: d.seeking_description,
        }
    }
}

/// Form document for `GET /venues/create` and `GET /venues/{id}/edit`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueFormDocument {
    /// Path the form posts to.
    pub action: String,
    /// Current values; empty for a new venue.
    pub values: VenueDto,
}

impl VenueFormDocument {
    /// Blank form for a new venue.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            action: "/venues/create".to_string(),
            values: VenueDto::default(),
        }
    }

    /// Form prefilled with an existing venue.
    #[must_use]
    pub fn prefilled(venue: Venue) -> Self {
        Self {
            action: format!("/venues/{}/edit", venue.id),
            values: VenueDto::from(venue),
        }
    }
}

/// An artist booked at the venue, as listed on the venue profile.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueShowDto {
    /// Performing artist.
    pub artist_id: i64,
    /// Artist name.
    pub artist_name: String,
    /// Artist image.
    pub artist_image_link: Option<String>,
    /// Start time, `YYYY-MM-DDTHH:MM:SS`.
    pub start_time: String,
}

impl From<ShowCounterpart> for VenueShowDto {
    fn from(show: ShowCounterpart) -> Self {
        Self {
            artist_id: show.id,
            artist_name: show.name,
            artist_image_link: show.image_link,
            start_time: format_start_time(show.start_time),
        }
    }
}

/// Response body for `GET /venues/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueDetailResponse {
    /// The venue's fields.
    #[serde(flatten)]
    pub venue: VenueDto,
    /// Shows that started before now.
    pub past_shows: Vec<VenueShowDto>,
    /// Shows starting after now.
    pub upcoming_shows: Vec<VenueShowDto>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl From<VenueDetail> for VenueDetailResponse {
    fn from(detail: VenueDetail) -> Self {
        let past_shows: Vec<VenueShowDto> =
            detail.shows.past.into_iter().map(VenueShowDto::from).collect();
        let upcoming_shows: Vec<VenueShowDto> = detail
            .shows
            .upcoming
            .into_iter()
            .map(VenueShowDto::from)
            .collect();
        Self {
            venue: VenueDto::from(detail.venue),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// A venue in the directory listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueListingDto {
    /// Venue id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Shows starting after now.
    pub num_upcoming_shows: i64,
}

impl From<VenueListing> for VenueListingDto {
    fn from(listing: VenueListing) -> Self {
        Self {
            id: listing.id.get(),
            name: listing.name,
            num_upcoming_shows: listing.num_upcoming_shows,
        }
    }
}

/// One (city, state) group of the directory.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AreaDto {
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Venues in the area.
    pub venues: Vec<VenueListingDto>,
}

impl From<Area> for AreaDto {
    fn from(area: Area) -> Self {
        Self {
            city: area.city,
            state: area.state,
            venues: area.venues.into_iter().map(VenueListingDto::from).collect(),
        }
    }
}
