//! Ordered, duplicate-free genre list shared by venues and artists.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Genres attached to a venue or an artist.
///
/// Keeps the order the genres were submitted in. Entries are trimmed,
/// blank entries are dropped and a repeated genre keeps only its first
/// position. Stored as a JSON array in a TEXT column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Genres(Vec<String>);

impl Genres {
    /// Builds a normalized genre list from any sequence of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || out.iter().any(|g| g == name) {
                continue;
            }
            out.push(name.to_string());
        }
        Self(out)
    }

    /// Parses a comma-separated form value such as `"Jazz, Folk"`.
    #[must_use]
    pub fn parse_list(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Decodes the JSON array stored in the database.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if `raw` is not a JSON string array.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Encodes the list as the JSON array stored in the database.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Returns the genres in submission order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of distinct genres.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no genre is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the genres in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListInput {
    List(Vec<String>),
    Text(String),
}

/// Serde adapter for submitted genres: a JSON array or a comma-separated
/// form value.
///
/// # Errors
///
/// Returns the deserializer's error when the value is neither a string
/// nor a list of strings.
pub fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let genres = match ListInput::deserialize(deserializer)? {
        ListInput::List(names) => Genres::new(names),
        ListInput::Text(raw) => Genres::parse_list(&raw),
    };
    Ok(genres.into())
}

impl From<Vec<String>> for Genres {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Genres> for Vec<String> {
    fn from(genres: Genres) -> Self {
        genres.0
    }
}

impl fmt::Display for Genres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
