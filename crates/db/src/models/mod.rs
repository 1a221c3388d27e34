//! Catalog row structs and list filters.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row, with a
//!   derived `status` that is never read from or written to the table
//! - A `Deserialize` list filter describing the optional request predicate

pub mod race;
pub mod sports_event;
