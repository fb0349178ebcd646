//! PostgreSQL implementation of director repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Director;
use crate::domain::repositories::DirectorRepository;
use crate::error::AppError;

/// PostgreSQL repository for directors.
pub struct PgDirectorRepository {
    pool: Arc<PgPool>,
}

impl PgDirectorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectorRepository for PgDirectorRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Director>, AppError> {
        let row = sqlx::query_as::<_, (i64, String)>(
            r#"
            SELECT id, name
            FROM directors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(id, name)| Director::new(id, name)))
    }
}
