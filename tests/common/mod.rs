#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use cinerank::api::handlers::health_handler;
use cinerank::api::routes::query_routes;
use cinerank::infrastructure::memory::{InMemoryStore, SeedData};
use cinerank::state::{AppState, Repositories};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.json");

/// Store holding `tests/fixtures/catalog.json`.
///
/// Likes: film 1 by {1, 2, 3}, film 2 by {1}, film 3 by {2}, film 5 by {3, 4}.
/// Films 3, 4 and 5 are by director 3 (1964, 1975, 1999).
pub fn catalog_store() -> Arc<InMemoryStore> {
    Arc::new(SeedData::from_path(CATALOG).unwrap().into_store())
}

pub fn create_test_state(repositories: Repositories) -> AppState {
    AppState::new(repositories, Duration::from_secs(5))
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(query_routes())
        .with_state(state)
}

/// Test server over the fixture catalog.
pub fn catalog_server() -> TestServer {
    let state = create_test_state(Repositories::in_memory(catalog_store()));
    TestServer::new(create_test_app(state)).unwrap()
}

/// Film ids of a JSON film array, in response order.
pub fn film_ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|film| film["id"].as_i64().unwrap())
        .collect()
}
