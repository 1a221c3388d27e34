//! Sports event entity model and list filter.

use std::cmp::Ordering;

use entain_core::record::CatalogRecord;
use entain_core::serde_util::null_as_default;
use entain_core::status::EventStatus;
use entain_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::predicate::{BindValue, ListFilter, Predicate};
use crate::repositories::CatalogEntity;

/// A row from the `sports_events` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportsEvent {
    pub id: DbId,
    pub name: String,
    pub sport_type: String,
    /// Location the event is held in, e.g. `"Texas"`.
    pub state: String,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    #[sqlx(skip)]
    pub status: Option<EventStatus>,
}

/// Optional predicate for sports event listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSportsEventsFilter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub visible: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sport_types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub states: Vec<String>,
}

impl ListFilter for ListSportsEventsFilter {
    fn apply(&self, predicate: &mut Predicate) {
        if self.visible {
            predicate.push_eq("visible", BindValue::Bool(true));
        }

        if !self.sport_types.is_empty() {
            predicate.push_in(
                "sport_type",
                self.sport_types.iter().cloned().map(BindValue::Text),
            );
        }

        if !self.states.is_empty() {
            predicate.push_in("state", self.states.iter().cloned().map(BindValue::Text));
        }
    }
}

impl CatalogRecord for SportsEvent {
    const ENTITY: &'static str = "SportsEvent";
    const ATTRIBUTE_KEYS: &'static [&'static str] = &["sport_type", "state"];

    fn id(&self) -> DbId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn advertised_start_time(&self) -> Timestamp {
        self.advertised_start_time
    }

    fn set_status(&mut self, status: EventStatus) {
        self.status = Some(status);
    }

    fn cmp_attribute(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "sport_type" => self.sport_type.cmp(&other.sport_type),
            "state" => self.state.cmp(&other.state),
            _ => Ordering::Equal,
        }
    }
}

impl CatalogEntity for SportsEvent {
    const TABLE: &'static str = "sports_events";
    const COLUMNS: &'static str = "id, name, sport_type, state, visible, advertised_start_time";

    type Filter = ListSportsEventsFilter;
}
