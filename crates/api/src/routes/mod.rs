pub mod health;
pub mod races;
pub mod sports_events;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /list-races                 list races (POST, filter + orderBy body)
/// /races/{id}                 get race by id
///
/// /list-sports-events         list sports events (POST, filter + orderBy body)
/// /sports-events/{id}         get sports event by id
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(races::router())
        .merge(sports_events::router())
}
