//! Client-selected ordering of catalog listings.
//!
//! The `order_by` string from the request is resolved to a [`SortKey`]
//! and the records are stable-sorted ascending on it. Unknown keys never
//! fail; they fall back to the advertised start time, the same ordering as
//! an empty key.

use std::cmp::Ordering;

use crate::record::CatalogRecord;

/// Order-by key for the numeric id.
pub const ORDER_BY_ID: &str = "id";

/// Order-by key for the display name (lexicographic).
pub const ORDER_BY_NAME: &str = "name";

/// Order-by key for the advertised start time. Also the fallback.
pub const ORDER_BY_ADVERTISED_START_TIME: &str = "advertised_start_time";

/// Resolved sort column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    /// Compared on whole epoch seconds; sub-second precision is ignored.
    #[default]
    AdvertisedStartTime,
    /// One of the entity's [`CatalogRecord::ATTRIBUTE_KEYS`].
    Attribute(&'static str),
}

impl SortKey {
    /// Map a client-supplied key onto a sort column for `R`.
    ///
    /// Matching is exact and case-sensitive. Anything unrecognised
    /// (including the empty string) resolves to [`SortKey::AdvertisedStartTime`].
    pub fn resolve<R: CatalogRecord>(order_by: &str) -> Self {
        match order_by {
            ORDER_BY_ID => SortKey::Id,
            ORDER_BY_NAME => SortKey::Name,
            ORDER_BY_ADVERTISED_START_TIME => SortKey::AdvertisedStartTime,
            other => R::ATTRIBUTE_KEYS
                .iter()
                .copied()
                .find(|key| *key == other)
                .map(SortKey::Attribute)
                .unwrap_or_default(),
        }
    }

    /// Compare two records ascending on this key.
    pub fn compare<R: CatalogRecord>(self, a: &R, b: &R) -> Ordering {
        match self {
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::AdvertisedStartTime => a
                .advertised_start_time()
                .timestamp()
                .cmp(&b.advertised_start_time().timestamp()),
            SortKey::Attribute(key) => a.cmp_attribute(b, key),
        }
    }
}

/// Sort `records` ascending by the column `order_by` resolves to.
///
/// The sort is stable: records with equal keys keep their input order.
/// Returns the key that was applied.
pub fn order_records<R: CatalogRecord>(records: &mut [R], order_by: &str) -> SortKey {
    let key = SortKey::resolve::<R>(order_by);
    records.sort_by(|a, b| key.compare(a, b));
    key
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
