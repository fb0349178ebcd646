//! Handlers for per-user endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::film::{FilmDto, to_film_dtos};
use crate::api::dto::user::UserDto;
use crate::application::query::run_query;
use crate::error::AppError;
use crate::state::AppState;

/// Recommends films for a user.
///
/// # Endpoint
///
/// `GET /users/{userId}/recommendations`
///
/// An empty array means no recommendation candidate exists.
pub async fn recommendations_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<FilmDto>>, AppError> {
    let films = run_query(
        "recommended_films",
        state.query_timeout,
        state.recommendation_service.recommended_films(user_id),
    )
    .await?;

    Ok(Json(to_film_dtos(films)))
}

/// Lists users both users have added as friends.
///
/// # Endpoint
///
/// `GET /users/{userId}/friends/common/{otherId}`
pub async fn common_friends_handler(
    State(state): State<AppState>,
    Path((user_id, other_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = run_query(
        "common_friends",
        state.query_timeout,
        state.overlap_service.common_friends(user_id, other_id),
    )
    .await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}
