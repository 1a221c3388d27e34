//! Repository layer.
//!
//! Races and sports events share one generic repository, [`CatalogRepo`],
//! parameterized over the row type. [`CatalogStore`] is the object-safe seam
//! the HTTP layer depends on; it is implemented for `PgPool`.

pub mod catalog_repo;

pub use catalog_repo::{CatalogEntity, CatalogRepo, CatalogStore, HealthProbe};

use crate::models::race::Race;
use crate::models::sports_event::SportsEvent;

/// Read access to the `races` table.
pub type RaceRepo = CatalogRepo<Race>;

/// Read access to the `sports_events` table.
pub type SportsEventRepo = CatalogRepo<SportsEvent>;
