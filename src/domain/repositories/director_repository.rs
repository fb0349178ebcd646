//! Repository trait for directors.

use crate::domain::entities::Director;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for directors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorRepository: Send + Sync {
    /// Finds a director by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Director>, AppError>;
}
