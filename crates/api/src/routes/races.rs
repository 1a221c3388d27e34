//! Route definitions for races.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::races;
use crate::state::AppState;

/// Race routes, merged into `/v1`.
///
/// ```text
/// POST /list-races    -> list
/// GET  /races/{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list-races", post(races::list))
        .route("/races/{id}", get(races::get_by_id))
}
