//! Request handlers for the catalog endpoints.
//!
//! Each submodule provides `list` and `get_by_id` for one entity. Handlers
//! sample the current time once and delegate to [`crate::catalog`].

pub mod races;
pub mod sports_events;
