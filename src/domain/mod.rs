//! Domain layer: entities, identifiers and the pure rules around them.
//!
//! Everything here is independent of the database and HTTP layers:
//! typed ids, the venue/artist/show records, genre normalization, the
//! seeking-flag parser, past/upcoming classification, area grouping and
//! the [`Clock`] that defines "now".

pub mod area;
pub mod artist;
pub mod clock;
pub mod genres;
pub mod ids;
pub mod search;
pub mod seeking;
pub mod show;
pub mod validation;
pub mod venue;

pub use area::{Area, group_by_area};
pub use artist::{Artist, ArtistDetail, ArtistDraft, ArtistSummary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use genres::Genres;
pub use ids::{ArtistId, EntityKind, ShowId, VenueId};
pub use search::{SearchHit, SearchResults, fold_name};
pub use show::{NewShow, Show, ShowCounterpart, ShowListing, ShowSchedule, ShowTiming};
pub use venue::{Venue, VenueDetail, VenueDraft, VenueListing};
