//! Grouping of venues into (city, state) areas.

use std::collections::BTreeMap;

use serde::Serialize;

use super::VenueListing;

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    /// City of every venue in the group.
    pub city: String,
    /// State of every venue in the group.
    pub state: String,
    /// Venues in the area, in the order they were given.
    pub venues: Vec<VenueListing>,
}

/// Groups venues by (city, state).
///
/// Areas come out sorted by city then state; inside an area venues keep
/// their input order. Every input venue lands in exactly one area.
#[must_use]
pub fn group_by_area(venues: Vec<VenueListing>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<VenueListing>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.city.clone(), venue.state.clone()))
            .or_default()
            .push(venue);
    }
    areas
        .into_iter()
        .map(|((city, state), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}
