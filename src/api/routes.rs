//! API route configuration.

use crate::api::handlers::{
    common_films_handler, common_friends_handler, director_films_handler, popular_films_handler,
    recommendations_handler, search_films_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Ranking and recommendation routes. All are read-only.
///
/// # Endpoints
///
/// - `GET /films/popular`                          - Most liked films
/// - `GET /films/director/{directorId}`            - A director's films
/// - `GET /films/common`                           - Films two users both like
/// - `GET /films/search`                           - Title and director search
/// - `GET /users/{userId}/recommendations`         - Neighbor-based recommendations
/// - `GET /users/{userId}/friends/common/{otherId}` - Shared friends
pub fn query_routes() -> Router<AppState> {
    Router::new()
        .route("/films/popular", get(popular_films_handler))
        .route("/films/director/{director_id}", get(director_films_handler))
        .route("/films/common", get(common_films_handler))
        .route("/films/search", get(search_films_handler))
        .route("/users/{user_id}/recommendations", get(recommendations_handler))
        .route(
            "/users/{user_id}/friends/common/{other_id}",
            get(common_friends_handler),
        )
}
