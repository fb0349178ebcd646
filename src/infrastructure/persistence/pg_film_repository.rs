//! PostgreSQL implementation of film repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Film, Mpa};
use crate::domain::repositories::{FilmFilter, FilmRepository};
use crate::error::AppError;

const SELECT_FILMS: &str = r#"
    SELECT f.id, f.name, f.description, f.release_date, f.duration,
           m.id AS mpa_id, m.name AS mpa_name
    FROM films f
    JOIN mpa m ON m.id = f.mpa_id
"#;

#[derive(sqlx::FromRow)]
struct FilmRow {
    id: i64,
    name: String,
    description: String,
    release_date: NaiveDate,
    duration: i32,
    mpa_id: i64,
    mpa_name: String,
}

impl From<FilmRow> for Film {
    fn from(row: FilmRow) -> Self {
        Film::new(
            row.id,
            row.name,
            row.description,
            row.release_date,
            row.duration,
            Mpa::new(row.mpa_id, row.mpa_name),
        )
    }
}

/// PostgreSQL repository for films.
///
/// Returns bare films joined with their MPA rating.
pub struct PgFilmRepository {
    pool: Arc<PgPool>,
}

impl PgFilmRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch(&self, sql: &str) -> Result<Vec<Film>, AppError> {
        let rows = sqlx::query_as::<_, FilmRow>(sql)
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows.into_iter().map(Film::from).collect())
    }
}

#[async_trait]
impl FilmRepository for PgFilmRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Film>, AppError> {
        let sql = format!("{SELECT_FILMS} WHERE f.id = $1");
        let row = sqlx::query_as::<_, FilmRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(row.map(Film::from))
    }

    async fn find_all(&self) -> Result<Vec<Film>, AppError> {
        self.fetch(&format!("{SELECT_FILMS} ORDER BY f.id")).await
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Film>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!("{SELECT_FILMS} WHERE f.id = ANY($1) ORDER BY f.id");
        let rows = sqlx::query_as::<_, FilmRow>(&sql)
            .bind(ids)
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows.into_iter().map(Film::from).collect())
    }

    async fn find_filtered(&self, filter: FilmFilter) -> Result<Vec<Film>, AppError> {
        let sql = format!(
            r#"{SELECT_FILMS}
            WHERE ($1::bigint IS NULL OR EXISTS (
                      SELECT 1 FROM film_genres fg
                      WHERE fg.film_id = f.id AND fg.genre_id = $1))
              AND ($2::int IS NULL OR EXTRACT(YEAR FROM f.release_date)::int = $2)
            ORDER BY f.id"#
        );
        let rows = sqlx::query_as::<_, FilmRow>(&sql)
            .bind(filter.genre_id)
            .bind(filter.release_year)
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows.into_iter().map(Film::from).collect())
    }

    async fn find_by_director(&self, director_id: i64) -> Result<Vec<Film>, AppError> {
        let sql = format!(
            r#"{SELECT_FILMS}
            JOIN film_directors fd ON fd.film_id = f.id
            WHERE fd.director_id = $1
            ORDER BY f.id"#
        );
        let rows = sqlx::query_as::<_, FilmRow>(&sql)
            .bind(director_id)
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows.into_iter().map(Film::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
