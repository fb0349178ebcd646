//! Repository trait for the user-film like relation.

use std::collections::{HashMap, HashSet};

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for like edges.
///
/// A like edge `(user_id, film_id)` exists at most once. Unknown ids produce
/// empty sets and zero counts rather than errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLikeRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Returns the ids of users who like the film.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn likers_of_film(&self, film_id: i64) -> Result<HashSet<i64>, AppError>;

    /// Returns the ids of films the user likes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn films_liked_by(&self, user_id: i64) -> Result<HashSet<i64>, AppError>;

    /// Counts likes per film without materializing liker sets.
    ///
    /// Films without likes may be absent from the map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn like_counts(&self, film_ids: &[i64]) -> Result<HashMap<i64, u64>, AppError>;

    /// Returns liker sets for many films in one lookup.
    ///
    /// Films without likes may be absent from the map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn likers_of_films(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, HashSet<i64>>, AppError>;
}
