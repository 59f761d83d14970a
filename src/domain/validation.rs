//! Field checks shared by venue and artist submissions.

use super::Genres;
use crate::error::DirectoryError;

/// Limit for city, state, address, phone and facebook link.
pub const SHORT_TEXT_MAX: usize = 120;
/// Limit for image and website links.
pub const LINK_MAX: usize = 500;
/// Limit for a single genre name.
pub const GENRE_MAX: usize = 50;

/// Trims `value` and fails if nothing is left.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] when the trimmed value is empty.
pub fn required(field: &str, value: &str) -> Result<String, DirectoryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DirectoryError::Validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// Trims an optional value, mapping blank input to `None`.
#[must_use]
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Fails if `value` is longer than `max` characters.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] when the limit is exceeded.
pub fn max_len(field: &str, value: Option<&str>, max: usize) -> Result<(), DirectoryError> {
    match value {
        Some(v) if v.chars().count() > max => Err(DirectoryError::Validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// Fails if any genre name exceeds [`GENRE_MAX`].
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] naming the first offending genre.
pub fn genres(genres: &Genres) -> Result<(), DirectoryError> {
    genres
        .iter()
        .try_for_each(|g| max_len("genre", Some(g), GENRE_MAX))
}
