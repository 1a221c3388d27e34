//! Handlers for races.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use entain_core::serde_util::null_as_default;
use entain_core::types::DbId;
use entain_db::models::race::ListRacesFilter;
use serde::Deserialize;

use crate::catalog;
use crate::error::AppResult;
use crate::response::{GetRaceResponse, ListRacesResponse};
use crate::state::AppState;

/// Body of `POST /v1/list-races`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRacesRequest {
    pub filter: Option<ListRacesFilter>,
    /// Column to sort by; unknown or empty values sort by start time.
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_by: String,
}

/// POST /v1/list-races
pub async fn list(
    State(state): State<AppState>,
    Json(input): Json<ListRacesRequest>,
) -> AppResult<Json<ListRacesResponse>> {
    let races = catalog::list(
        state.races.as_ref(),
        input.filter.as_ref(),
        &input.order_by,
        Utc::now(),
    )
    .await?;
    Ok(Json(ListRacesResponse { races }))
}

/// GET /v1/races/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GetRaceResponse>> {
    let race = catalog::get(state.races.as_ref(), id, Utc::now()).await?;
    Ok(Json(GetRaceResponse { race }))
}
