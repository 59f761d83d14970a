//! Type-safe entity identifiers.
//!
//! Every table has its own newtype over the SQLite `INTEGER PRIMARY KEY`,
//! so a venue id cannot be handed to a query expecting an artist id. Ids
//! are assigned by the store on insert and immutable thereafter.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            ToSchema,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw row id.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a row in the `venues` table.
    VenueId
);

entity_id!(
    /// Identifier of a row in the `artists` table.
    ArtistId
);

entity_id!(
    /// Identifier of a row in the `shows` table.
    ShowId
);

/// The three tables of the directory.
///
/// Used to parameterize queries that run the same way over venues and
/// artists (search, delete) and to name the table in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A venue row.
    Venue,
    /// An artist row.
    Artist,
    /// A show row.
    Show,
}

impl EntityKind {
    /// Lowercase entity name used in messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Artist => "artist",
            Self::Show => "show",
        }
    }

    /// Capitalized entity name used in user-facing notifications.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Venue => "Venue",
            Self::Artist => "Artist",
            Self::Show => "Show",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
