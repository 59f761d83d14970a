//! Data Transfer Objects for request/response serialization.
//!
//! Submissions deserialize from either form or JSON bodies. Ids are plain
//! integers and start times are rendered as `YYYY-MM-DDTHH:MM:SS`.

pub mod artist_dto;
pub mod common_dto;
pub mod show_dto;
pub mod venue_dto;

pub use artist_dto::*;
pub use common_dto::*;
pub use show_dto::*;
pub use venue_dto::*;
