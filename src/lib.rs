//! # booking-directory
//!
//! Venue, artist and show booking directory served over HTTP.
//!
//! Venues are listed by area, artists by id, and each profile shows past
//! and upcoming bookings split around "now". Submissions arrive as HTML
//! form bodies (or JSON) and every mutation runs in its own database
//! transaction.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP forms, JSON)
//!     │
//!     ├── Handlers + DTOs (api/)
//!     │
//!     ├── VenueService / ArtistService / ShowService (service/)
//!     ├── Clock, Genres, grouping, timing rules (domain/)
//!     │
//!     ├── Query functions + UnitOfWork (persistence/)
//!     │
//!     └── SQLite (sqlx, embedded migrations)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
