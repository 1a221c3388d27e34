//! Lifecycle status derivation.
//!
//! A record is `CLOSED` once its advertised start time has been reached and
//! `OPEN` before that. The status is never stored; it is recomputed against
//! a caller-supplied `now` every time a record is served.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::CatalogRecord;
use crate::types::Timestamp;

/// Wire value for a record that has not started yet.
pub const STATUS_OPEN: &str = "OPEN";

/// Wire value for a record whose start time has passed (or is exactly now).
pub const STATUS_CLOSED: &str = "CLOSED";

/// Derived lifecycle state of a race or sports event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventStatus {
    Open,
    Closed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Open => STATUS_OPEN,
            EventStatus::Closed => STATUS_CLOSED,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the status for a single advertised start time.
///
/// An event starting exactly at `now` is already `Closed`.
pub fn derive_status(advertised_start: Timestamp, now: Timestamp) -> EventStatus {
    if advertised_start <= now {
        EventStatus::Closed
    } else {
        EventStatus::Open
    }
}

/// Stamp every record in `records` with its status as of `now`.
///
/// `now` must be sampled once by the caller so that every record in one
/// response is judged against the same instant.
pub fn assign_status<R: CatalogRecord>(records: &mut [R], now: Timestamp) {
    for record in records.iter_mut() {
        record.set_status(derive_status(record.advertised_start_time(), now));
    }
}

/// Single-record variant of [`assign_status`].
pub fn assign_status_single<R: CatalogRecord>(record: &mut R, now: Timestamp) {
    assign_status(std::slice::from_mut(record), now);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
