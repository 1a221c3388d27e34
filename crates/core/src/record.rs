//! The capability set shared by every catalog entity.
//!
//! Races and sports events differ only in their categorical columns, so the
//! status and ordering stages are written once against [`CatalogRecord`].

use std::cmp::Ordering;

use crate::status::EventStatus;
use crate::types::{DbId, Timestamp};

/// A catalog row that can be stamped with a status and reordered.
pub trait CatalogRecord {
    /// Entity name used in not-found messages (e.g. `"Race"`).
    const ENTITY: &'static str;

    /// Entity-specific order-by keys accepted on top of `id`, `name` and
    /// `advertised_start_time`.
    const ATTRIBUTE_KEYS: &'static [&'static str];

    fn id(&self) -> DbId;

    fn name(&self) -> &str;

    fn advertised_start_time(&self) -> Timestamp;

    fn set_status(&mut self, status: EventStatus);

    /// Compare two records on one of [`Self::ATTRIBUTE_KEYS`].
    ///
    /// Keys outside that list compare as equal.
    fn cmp_attribute(&self, other: &Self, key: &str) -> Ordering;
}
