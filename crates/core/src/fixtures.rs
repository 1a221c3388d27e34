//! In-crate record type for exercising the generic pipeline stages.

use std::cmp::Ordering;

use crate::record::CatalogRecord;
use crate::status::EventStatus;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq)]
pub struct TestEvent {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub rank: i64,
    pub advertised_start_time: Timestamp,
    pub status: Option<EventStatus>,
}

impl TestEvent {
    pub fn new(id: DbId, name: &str, advertised_start_time: Timestamp) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: String::new(),
            rank: 0,
            advertised_start_time,
            status: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_rank(mut self, rank: i64) -> Self {
        self.rank = rank;
        self
    }
}

impl CatalogRecord for TestEvent {
    const ENTITY: &'static str = "TestEvent";
    const ATTRIBUTE_KEYS: &'static [&'static str] = &["category", "rank"];

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
            "category" => self.category.cmp(&other.category),
            "rank" => self.rank.cmp(&other.rank),
            _ => Ordering::Equal,
        }
    }
}
