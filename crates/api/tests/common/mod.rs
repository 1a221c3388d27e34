#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use entain_api::config::ServerConfig;
use entain_api::router::build_app_router;
use entain_api::state::AppState;
use entain_core::types::{DbId, Timestamp};
use entain_db::models::race::{ListRacesFilter, Race};
use entain_db::models::sports_event::{ListSportsEventsFilter, SportsEvent};
use entain_db::repositories::{CatalogEntity, CatalogStore, HealthProbe};

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

/// Store over a fixed row set that evaluates filters in memory.
pub struct MemoryStore<E: CatalogEntity> {
    rows: Vec<E>,
    matches: fn(&E, &E::Filter) -> bool,
}

#[async_trait]
impl<E: CatalogEntity + Clone> CatalogStore<E> for MemoryStore<E> {
    async fn list(&self, filter: Option<&E::Filter>) -> Result<Vec<E>, sqlx::Error> {
        Ok(self
            .rows
            .iter()
            .filter(|row| filter.map_or(true, |f| (self.matches)(row, f)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        Ok(self.rows.iter().find(|row| row.id() == id).cloned())
    }
}

fn race_matches(race: &Race, filter: &ListRacesFilter) -> bool {
    (!filter.visible || race.visible)
        && (filter.meeting_ids.is_empty() || filter.meeting_ids.contains(&race.meeting_id))
}

fn sports_event_matches(event: &SportsEvent, filter: &ListSportsEventsFilter) -> bool {
    (!filter.visible || event.visible)
        && (filter.sport_types.is_empty() || filter.sport_types.contains(&event.sport_type))
        && (filter.states.is_empty() || filter.states.contains(&event.state))
}

/// Store whose every read fails the way an exhausted pool does.
pub struct FailingStore;

#[async_trait]
impl<E: CatalogEntity> CatalogStore<E> for FailingStore {
    async fn list(&self, _filter: Option<&E::Filter>) -> Result<Vec<E>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<E>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Health probe with a fixed answer.
pub struct StaticProbe(pub bool);

#[async_trait]
impl HealthProbe for StaticProbe {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.0 {
            Ok(())
        } else {
            Err(sqlx::Error::PoolClosed)
        }
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn race(id: DbId, meeting_id: DbId, visible: bool, start: Timestamp) -> Race {
    Race {
        id,
        meeting_id,
        name: format!("Race {id}"),
        number: id,
        visible,
        advertised_start_time: start,
        status: None,
    }
}

pub fn sports_event(
    id: DbId,
    name: &str,
    sport_type: &str,
    state: &str,
    visible: bool,
    start: Timestamp,
) -> SportsEvent {
    SportsEvent {
        id,
        name: name.to_string(),
        sport_type: sport_type.to_string(),
        state: state.to_string(),
        visible,
        advertised_start_time: start,
        status: None,
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("0".to_string()),
        _ => None,
    })
}

/// Build the full application router over in-memory rows.
pub fn build_test_app(races: Vec<Race>, sports_events: Vec<SportsEvent>) -> Router {
    let config = test_config();
    let state = AppState {
        races: Arc::new(MemoryStore {
            rows: races,
            matches: race_matches,
        }),
        sports_events: Arc::new(MemoryStore {
            rows: sports_events,
            matches: sports_event_matches,
        }),
        db: Arc::new(StaticProbe(true)),
    };
    build_app_router(state, &config)
}

/// Build the router with stores that always fail and an unhealthy database.
pub fn build_failing_app() -> Router {
    let config = test_config();
    let state = AppState {
        races: Arc::new(FailingStore),
        sports_events: Arc::new(FailingStore),
        db: Arc::new(StaticProbe(false)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
