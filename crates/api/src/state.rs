use std::sync::Arc;

use entain_db::models::race::Race;
use entain_db::models::sports_event::SportsEvent;
use entain_db::repositories::{CatalogStore, HealthProbe};
use entain_db::DbPool;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Stores are trait
/// objects so tests can swap the database for in-memory rows.
#[derive(Clone)]
pub struct AppState {
    /// Race catalog storage.
    pub races: Arc<dyn CatalogStore<Race>>,
    /// Sports event catalog storage.
    pub sports_events: Arc<dyn CatalogStore<SportsEvent>>,
    /// Database reachability check for `/health`.
    pub db: Arc<dyn HealthProbe>,
}

impl AppState {
    /// Back every store with the same PostgreSQL pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            races: Arc::new(pool.clone()),
            sports_events: Arc::new(pool.clone()),
            db: Arc::new(pool),
        }
    }
}
