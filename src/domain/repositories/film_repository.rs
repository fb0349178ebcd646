//! Repository trait for film lookups.

use crate::domain::entities::Film;
use crate::error::AppError;
use async_trait::async_trait;

/// Optional filters for film listings.
///
/// Filters combine with AND; `None` leaves that dimension unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilmFilter {
    pub genre_id: Option<i64>,
    pub release_year: Option<i32>,
}

impl FilmFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to films tagged with the given genre.
    pub fn with_genre(mut self, genre_id: Option<i64>) -> Self {
        self.genre_id = genre_id;
        self
    }

    /// Restricts the listing to films released in the given year.
    pub fn with_release_year(mut self, release_year: Option<i32>) -> Self {
        self.release_year = release_year;
        self
    }
}

/// Repository interface for films.
///
/// All methods return bare films (no genres or directors attached), ordered by
/// film id ascending unless stated otherwise.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFilmRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Finds a film by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Film>, AppError>;

    /// Lists every film in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_all(&self) -> Result<Vec<Film>, AppError>;

    /// Fetches the films with the given ids. Unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Film>, AppError>;

    /// Lists films matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_filtered(&self, filter: FilmFilter) -> Result<Vec<Film>, AppError>;

    /// Lists films associated with the given director.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_director(&self, director_id: i64) -> Result<Vec<Film>, AppError>;

    /// Verifies the backing store answers reads.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
