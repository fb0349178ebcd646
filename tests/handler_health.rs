mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use cinerank::domain::entities::Film;
use cinerank::domain::repositories::{FilmFilter, FilmRepository};
use cinerank::error::AppError;
use cinerank::state::Repositories;
use serde_json::{Value, json};
use std::sync::Arc;

/// Film repository whose store is unreachable.
struct UnreachableFilms;

#[async_trait]
impl FilmRepository for UnreachableFilms {
    async fn find_by_id(&self, _id: i64) -> Result<Option<Film>, AppError> {
        Err(unreachable_store())
    }

    async fn find_all(&self) -> Result<Vec<Film>, AppError> {
        Err(unreachable_store())
    }

    async fn find_by_ids(&self, _ids: &[i64]) -> Result<Vec<Film>, AppError> {
        Err(unreachable_store())
    }

    async fn find_filtered(&self, _filter: FilmFilter) -> Result<Vec<Film>, AppError> {
        Err(unreachable_store())
    }

    async fn find_by_director(&self, _director_id: i64) -> Result<Vec<Film>, AppError> {
        Err(unreachable_store())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable_store())
    }
}

fn unreachable_store() -> AppError {
    AppError::internal("Database error", json!({}))
}

fn unreachable_server() -> TestServer {
    let mut repositories = Repositories::in_memory(common::catalog_store());
    repositories.films = Arc::new(UnreachableFilms);
    let state = common::create_test_state(repositories);
    TestServer::new(common::create_test_app(state)).unwrap()
}

#[tokio::test]
async fn test_health_ok() {
    let server = common::catalog_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_store_fails() {
    let server = unreachable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let server = unreachable_server();

    let response = server.get("/films/popular").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}
