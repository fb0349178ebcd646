//! PostgreSQL implementation of like repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::repositories::LikeRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `film_likes` relation.
///
/// The `(film_id, user_id)` primary key guarantees at most one edge per pair.
pub struct PgLikeRepository {
    pool: Arc<PgPool>,
}

impl PgLikeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn likers_of_film(&self, film_id: i64) -> Result<HashSet<i64>, AppError> {
        let users = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT user_id
            FROM film_likes
            WHERE film_id = $1
            "#,
        )
        .bind(film_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users.into_iter().collect())
    }

    async fn films_liked_by(&self, user_id: i64) -> Result<HashSet<i64>, AppError> {
        let films = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT film_id
            FROM film_likes
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(films.into_iter().collect())
    }

    async fn like_counts(&self, film_ids: &[i64]) -> Result<HashMap<i64, u64>, AppError> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT film_id, COUNT(*) AS likes
            FROM film_likes
            WHERE film_id = ANY($1)
            GROUP BY film_id
            "#,
        )
        .bind(film_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(film_id, likes)| (film_id, likes.max(0) as u64))
            .collect())
    }

    async fn likers_of_films(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, HashSet<i64>>, AppError> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT film_id, user_id
            FROM film_likes
            WHERE film_id = ANY($1)
            "#,
        )
        .bind(film_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut likers: HashMap<i64, HashSet<i64>> = HashMap::new();
        for (film_id, user_id) in rows {
            likers.entry(film_id).or_default().insert(user_id);
        }
        Ok(likers)
    }
}
