//! Response envelope types for the catalog endpoints.
//!
//! Listings are wrapped under the plural entity name and single records under
//! the singular one, e.g. `{ "races": [...] }` and `{ "race": {...} }`.

use entain_db::models::race::Race;
use entain_db::models::sports_event::SportsEvent;
use serde::Serialize;

/// `{ "races": [...] }`
#[derive(Debug, Serialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

/// `{ "race": {...} }`
#[derive(Debug, Serialize)]
pub struct GetRaceResponse {
    pub race: Race,
}

/// `{ "sportsEvents": [...] }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSportsEventsResponse {
    pub sports_events: Vec<SportsEvent>,
}

/// `{ "sportsEvent": {...} }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSportsEventResponse {
    pub sports_event: SportsEvent,
}
