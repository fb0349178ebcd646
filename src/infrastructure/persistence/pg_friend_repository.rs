//! PostgreSQL implementation of friend repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::repositories::FriendRepository;
use crate::error::AppError;

/// PostgreSQL repository for the directed `friends` relation.
pub struct PgFriendRepository {
    pool: Arc<PgPool>,
}

impl PgFriendRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendRepository for PgFriendRepository {
    async fn friends_of(&self, user_id: i64) -> Result<HashSet<i64>, AppError> {
        let friends = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT friend_id
            FROM friends
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(friends.into_iter().collect())
    }
}
