//! Handlers for film ranking endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::film::{FilmDto, to_film_dtos};
use crate::api::dto::params::{
    CommonFilmsParams, DirectorFilmsParams, PopularParams, SearchParams,
};
use crate::application::query::run_query;
use crate::domain::query::{DirectorSort, SearchFields};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most liked films.
///
/// # Endpoint
///
/// `GET /films/popular`
///
/// # Query Parameters
///
/// - `count` (optional): Number of films (default: 10, must be positive)
/// - `genreId` (optional): Only films tagged with this genre
/// - `year` (optional): Only films released in this year
///
/// # Errors
///
/// Returns 400 Bad Request if `count` is not positive.
pub async fn popular_films_handler(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Result<Json<Vec<FilmDto>>, AppError> {
    params.validate()?;

    let films = run_query(
        "popular_films",
        state.query_timeout,
        state
            .popularity_service
            .popular_films(params.count(), params.genre_id, params.year),
    )
    .await?;

    Ok(Json(to_film_dtos(films)))
}

/// Lists a director's films.
///
/// # Endpoint
///
/// `GET /films/director/{directorId}?sortBy=likes|year`
///
/// # Errors
///
/// Returns 400 Bad Request if `sortBy` is missing or unknown.
/// Returns 404 Not Found if the director does not exist.
pub async fn director_films_handler(
    State(state): State<AppState>,
    Path(director_id): Path<i64>,
    Query(params): Query<DirectorFilmsParams>,
) -> Result<Json<Vec<FilmDto>>, AppError> {
    params.validate()?;
    let sort: DirectorSort = params.sort_by.as_deref().unwrap_or_default().parse()?;

    let films = run_query(
        "director_films",
        state.query_timeout,
        state.filmography_service.director_films(director_id, sort),
    )
    .await?;

    Ok(Json(to_film_dtos(films)))
}

/// Lists films liked by both users.
///
/// # Endpoint
///
/// `GET /films/common?userId=&friendId=`
///
/// An empty array means the users share no liked film.
///
/// # Errors
///
/// Returns 400 Bad Request if either id is missing.
pub async fn common_films_handler(
    State(state): State<AppState>,
    Query(params): Query<CommonFilmsParams>,
) -> Result<Json<Vec<FilmDto>>, AppError> {
    params.validate()?;
    let (Some(user_id), Some(friend_id)) = (params.user_id, params.friend_id) else {
        return Err(AppError::bad_request(
            "userId and friendId are required",
            json!({ "user_id": params.user_id, "friend_id": params.friend_id }),
        ));
    };

    let films = run_query(
        "common_films",
        state.query_timeout,
        state.overlap_service.common_films(user_id, friend_id),
    )
    .await?;

    Ok(Json(to_film_dtos(films)))
}

/// Searches films by title and/or director name.
///
/// # Endpoint
///
/// `GET /films/search?query=&by=title,director`
///
/// # Errors
///
/// Returns 400 Bad Request if `query` is missing or blank, or `by` holds an
/// unknown field.
pub async fn search_films_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<FilmDto>>, AppError> {
    params.validate()?;
    let fields = SearchFields::parse(params.by.as_deref())?;
    let query = params.query.unwrap_or_default();

    let films = run_query(
        "search_films",
        state.query_timeout,
        state.search_service.search_films(&query, &fields),
    )
    .await?;

    Ok(Json(to_film_dtos(films)))
}
