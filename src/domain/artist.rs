//! Artists: performers booked at venues.

use serde::{Deserialize, Serialize};

use super::validation::{self, LINK_MAX, SHORT_TEXT_MAX};
use super::{ArtistId, Genres, ShowSchedule};
use crate::error::DirectoryError;

/// A persisted artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Store-assigned id (immutable).
    pub id: ArtistId,
    /// The artist's fields.
    #[serde(flatten)]
    pub details: ArtistDraft,
}

/// Editable artist fields, used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistDraft {
    /// Display name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Link to a picture of the artist.
    pub image_link: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Genres the artist plays.
    pub genres: Genres,
    /// Whether the artist is looking for venues.
    pub seeking_venue: bool,
    /// Free-text description of what the artist is looking for.
    pub seeking_description: Option<String>,
}

impl ArtistDraft {
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
            phone: validation::optional(self.phone),
            image_link: validation::optional(self.image_link),
            facebook_link: validation::optional(self.facebook_link),
            website: validation::optional(self.website),
            genres: self.genres,
            seeking_venue: self.seeking_venue,
            seeking_description: validation::optional(self.seeking_description),
        };

        validation::max_len("city", Some(&draft.city), SHORT_TEXT_MAX)?;
        validation::max_len("state", Some(&draft.state), SHORT_TEXT_MAX)?;
        validation::max_len("phone", draft.phone.as_deref(), SHORT_TEXT_MAX)?;
        validation::max_len("facebook_link", draft.facebook_link.as_deref(), SHORT_TEXT_MAX)?;
        validation::max_len("image_link", draft.image_link.as_deref(), LINK_MAX)?;
        validation::max_len("website", draft.website.as_deref(), LINK_MAX)?;
        validation::genres(&draft.genres)?;

        Ok(draft)
    }
}

/// Id and name of an artist, as shown in the artist index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    /// Artist id.
    pub id: ArtistId,
    /// Display name.
    pub name: String,
}

/// Artist profile with its shows split around now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    /// The artist itself.
    pub artist: Artist,
    /// Its past and upcoming shows.
    pub shows: ShowSchedule,
}
