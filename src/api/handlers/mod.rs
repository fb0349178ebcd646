//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod films;
pub mod health;
pub mod users;

pub use films::{
    common_films_handler, director_films_handler, popular_films_handler, search_films_handler,
};
pub use health::health_handler;
pub use users::{common_friends_handler, recommendations_handler};
