//! Venues: places that host shows.

use serde::{Deserialize, Serialize};

use super::validation::{self, LINK_MAX, SHORT_TEXT_MAX};
use super::{Genres, ShowSchedule, VenueId};
use crate::error::DirectoryError;

/// A persisted venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Store-assigned id (immutable).
    pub id: VenueId,
    /// The venue's fields.
    #[serde(flatten)]
    pub details: VenueDraft,
}

/// Editable venue fields, used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDraft {
    /// Display name.
    pub name: String,
    /// City part of the venue's area.
    pub city: String,
    /// State part of the venue's area.
    pub state: String,
    /// Street address.
    pub address: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Link to a picture of the venue.
    pub image_link: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Genres the venue books.
    pub genres: Genres,
    /// Whether the venue is looking for artists.
    pub seeking_talent: bool,
    /// Free-text description of what the venue is looking for.
    pub seeking_description: Option<String>,
}

impl VenueDraft {
    /// Trims every field and checks required fields and length limits.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if `name`, `city` or `state`
    /// is blank or any field exceeds its limit.
    pub fn normalized(self) -> Result<Self, DirectoryError> {
        let draft = Self {
            name: validation::required("name", &self.name)?,
            city: validation::required("city", &self.city)?,
            state: validation::required("state", &self.state)?,
            address: validation::optional(self.address),
            phone: validation::optional(self.phone),
            image_link: validation::optional(self.image_link),
            facebook_link: validation::optional(self.facebook_link),
            website: validation::optional(self.website),
            genres: self.genres,
            seeking_talent: self.seeking_talent,
            seeking_description: validation::optional(self.seeking_description),
        };

        validation::max_len("city", Some(&draft.city), SHORT_TEXT_MAX)?;
        validation::max_len("state", Some(&draft.state), SHORT_TEXT_MAX)?;
        validation::max_len("address", draft.address.as_deref(), SHORT_TEXT_MAX)?;
        validation::max_len("phone", draft.phone.as_deref(), SHORT_TEXT_MAX)?;
        validation::max_len("facebook_link", draft.facebook_link.as_deref(), SHORT_TEXT_MAX)?;
        validation::max_len("image_link", draft.image_link.as_deref(), LINK_MAX)?;
        validation::max_len("website", draft.website.as_deref(), LINK_MAX)?;
        validation::genres(&draft.genres)?;

        Ok(draft)
    }
}

/// A venue as it appears in listings and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueListing {
    /// Venue id.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// City part of the area.
    pub city: String,
    /// State part of the area.
    pub state: String,
    /// Shows starting strictly after now.
    pub num_upcoming_shows: i64,
}

/// Venue profile with its shows split around now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    /// The venue itself.
    pub venue: Venue,
    /// Its past and upcoming shows.
    pub shows: ShowSchedule,
}
