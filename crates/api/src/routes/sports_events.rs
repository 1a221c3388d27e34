//! Route definitions for sports events.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sports_events;
use crate::state::AppState;

/// Sports event routes, merged into `/v1`.
///
/// ```text
/// POST /list-sports-events    -> list
/// GET  /sports-events/{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list-sports-events", post(sports_events::list))
        .route("/sports-events/{id}", get(sports_events::get_by_id))
}
