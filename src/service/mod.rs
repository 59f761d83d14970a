//! Service layer: business logic orchestration.
//!
//! [`VenueService`], [`ArtistService`] and [`ShowService`] sit between the
//! HTTP handlers and the query functions in [`crate::persistence`]. They
//! validate drafts, read "now" from the injected [`crate::domain::Clock`],
//! and wrap every mutation in a unit of work.

pub mod artist_service;
pub mod show_service;
pub mod venue_service;

pub use artist_service::ArtistService;
pub use show_service::ShowService;
pub use venue_service::VenueService;
