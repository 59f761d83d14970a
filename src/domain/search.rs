//! Name search shared by venues and artists.

use serde::Serialize;

/// Character used to escape `LIKE` wildcards in search terms.
pub const LIKE_ESCAPE: char = '\\';

/// One entity whose name matched a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Venue or artist id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Shows starting strictly after now.
    pub num_upcoming_shows: i64,
}

/// Result of a name search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    /// Number of hits.
    pub count: usize,
    /// Hits ordered by id.
    pub data: Vec<SearchHit>,
}

impl From<Vec<SearchHit>> for SearchResults {
    fn from(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Case-folded form of a name, stored beside it and matched by search.
///
/// Uses full Unicode lowercasing, so `"Café ÉBÈNE"` folds to
/// `"café ébène"`.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Builds a `LIKE` pattern matching names that contain `term`.
///
/// `%`, `_` and the escape character itself are escaped so they only
/// match literally.
#[must_use]
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
