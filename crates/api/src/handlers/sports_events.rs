//! Handlers for sports events.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use entain_core::serde_util::null_as_default;
use entain_core::types::DbId;
use entain_db::models::sports_event::ListSportsEventsFilter;
use serde::Deserialize;

use crate::catalog;
use crate::error::AppResult;
use crate::response::{GetSportsEventResponse, ListSportsEventsResponse};
use crate::state::AppState;

/// Body of `POST /v1/list-sports-events`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSportsEventsRequest {
    pub filter: Option<ListSportsEventsFilter>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_by: String,
}

/// POST /v1/list-sports-events
pub async fn list(
    State(state): State<AppState>,
    Json(input): Json<ListSportsEventsRequest>,
) -> AppResult<Json<ListSportsEventsResponse>> {
    let sports_events = catalog::list(
        state.sports_events.as_ref(),
        input.filter.as_ref(),
        &input.order_by,
        Utc::now(),
    )
    .await?;
    Ok(Json(ListSportsEventsResponse { sports_events }))
}

/// GET /v1/sports-events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GetSportsEventResponse>> {
    let sports_event = catalog::get(state.sports_events.as_ref(), id, Utc::now()).await?;
    Ok(Json(GetSportsEventResponse { sports_event }))
}
