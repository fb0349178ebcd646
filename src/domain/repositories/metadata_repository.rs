//! Repository trait for batch genre and director associations.

use std::collections::HashMap;

use crate::domain::entities::{Director, Genre};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for film metadata associations.
///
/// Both lookups take the whole batch of film ids at once so that enriching a
/// result list costs one round-trip per association type.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMetadataRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Returns genres per film, each list ordered by genre id.
    ///
    /// Films without genres may be absent from the map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn genres_for_films(&self, film_ids: &[i64])
    -> Result<HashMap<i64, Vec<Genre>>, AppError>;

    /// Returns directors per film, each list ordered by director id.
    ///
    /// Films without directors may be absent from the map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn directors_for_films(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Director>>, AppError>;
}
