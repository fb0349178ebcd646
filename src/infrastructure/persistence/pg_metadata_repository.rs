//! PostgreSQL implementation of metadata repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Director, Genre};
use crate::domain::repositories::MetadataRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AssociationRow {
    film_id: i64,
    id: i64,
    name: String,
}

/// Groups ordered association rows by film, keeping row order within a film.
fn group_by_film<T>(
    rows: Vec<AssociationRow>,
    make: impl Fn(i64, String) -> T,
) -> HashMap<i64, Vec<T>> {
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.film_id)
            .or_default()
            .push(make(row.id, row.name));
    }
    grouped
}

/// PostgreSQL repository for genre and director associations.
///
/// Each method issues exactly one query for the whole batch.
pub struct PgMetadataRepository {
    pool: Arc<PgPool>,
}

impl PgMetadataRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetadataRepository for PgMetadataRepository {
    async fn genres_for_films(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Genre>>, AppError> {
        let rows = sqlx::query_as::<_, AssociationRow>(
            r#"
            SELECT fg.film_id, g.id, g.name
            FROM film_genres fg
            JOIN genres g ON g.id = fg.genre_id
            WHERE fg.film_id = ANY($1)
            ORDER BY fg.film_id, g.id
            "#,
        )
        .bind(film_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(group_by_film(rows, Genre::new))
    }

    async fn directors_for_films(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Director>>, AppError> {
        let rows = sqlx::query_as::<_, AssociationRow>(
            r#"
            SELECT fd.film_id, d.id, d.name
            FROM film_directors fd
            JOIN directors d ON d.id = fd.director_id
            WHERE fd.film_id = ANY($1)
            ORDER BY fd.film_id, d.id
            "#,
        )
        .bind(film_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(group_by_film(rows, Director::new))
    }
}
