//! Race entity model and list filter.

use std::cmp::Ordering;

use entain_core::record::CatalogRecord;
use entain_core::serde_util::null_as_default;
use entain_core::status::EventStatus;
use entain_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::predicate::{BindValue, ListFilter, Predicate};
use crate::repositories::CatalogEntity;

/// A row from the `races` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: DbId,
    pub meeting_id: DbId,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    #[sqlx(skip)]
    pub status: Option<EventStatus>,
}

/// Optional predicate for race listings.
///
/// `visible` only filters when `true`; an empty `meeting_ids` list imposes no
/// constraint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRacesFilter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub visible: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meeting_ids: Vec<DbId>,
}

impl ListFilter for ListRacesFilter {
    fn apply(&self, predicate: &mut Predicate) {
        if self.visible {
            predicate.push_eq("visible", BindValue::Bool(true));
        }

        if !self.meeting_ids.is_empty() {
            predicate.push_in(
                "meeting_id",
                self.meeting_ids.iter().copied().map(BindValue::BigInt),
            );
        }
    }
}

impl CatalogRecord for Race {
    const ENTITY: &'static str = "Race";
    const ATTRIBUTE_KEYS: &'static [&'static str] = &["meeting_id", "number"];

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
            "meeting_id" => self.meeting_id.cmp(&other.meeting_id),
            "number" => self.number.cmp(&other.number),
            _ => Ordering::Equal,
        }
    }
}

impl CatalogEntity for Race {
    const TABLE: &'static str = "races";
    const COLUMNS: &'static str = "id, meeting_id, name, number, visible, advertised_start_time";

    type Filter = ListRacesFilter;
}
