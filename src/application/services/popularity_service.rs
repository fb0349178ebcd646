//! Global popularity rankings.

use std::sync::Arc;

use serde_json::json;

use super::MetadataEnricher;
use crate::domain::entities::Film;
use crate::domain::like_graph::LikeGraph;
use crate::domain::repositories::{FilmFilter, FilmRepository};
use crate::error::AppError;

/// Ranks films by how many users like them.
///
/// Genre and release-year filters narrow the candidate set before ranking and
/// combine with AND.
pub struct PopularityService {
    films: Arc<dyn FilmRepository>,
    graph: LikeGraph,
    enricher: MetadataEnricher,
}

impl PopularityService {
    pub fn new(films: Arc<dyn FilmRepository>, graph: LikeGraph, enricher: MetadataEnricher) -> Self {
        Self {
            films,
            graph,
            enricher,
        }
    }

    /// Returns the `limit` most liked films matching the filters.
    ///
    /// Ordered by like count descending, ties by film id ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is not positive.
    /// Returns [`AppError::Internal`] on storage errors.
    #[tracing::instrument(skip(self))]
    pub async fn popular_films(
        &self,
        limit: i64,
        genre_id: Option<i64>,
        year: Option<i32>,
    ) -> Result<Vec<Film>, AppError> {
        if limit <= 0 {
            return Err(AppError::bad_request(
                "Count must be positive",
                json!({ "count": limit }),
            ));
        }

        let filter = FilmFilter::new()
            .with_genre(genre_id)
            .with_release_year(year);
        let candidates = self.films.find_filtered(filter).await?;
        tracing::debug!(candidates = candidates.len(), "Ranking candidates");

        let mut ranked = self.graph.rank_by_popularity(candidates).await?;
        ranked.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        self.enricher.enrich(ranked).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Genre, Mpa};
    use crate::domain::repositories::{MockFilmRepository, MockLikeRepository, MockMetadataRepository};
    use crate::infrastructure::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn film(id: i64, year: i32) -> Film {
        Film::new(
            id,
            format!("Film {id}"),
            "",
            NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
            100,
            Mpa::new(1, "G"),
        )
    }

    fn service(store: InMemoryStore) -> PopularityService {
        let store = Arc::new(store);
        PopularityService::new(
            store.clone(),
            LikeGraph::new(store.clone()),
            MetadataEnricher::new(store),
        )
    }

    fn ids(films: &[Film]) -> Vec<i64> {
        films.iter().map(|f| f.id).collect()
    }

    #[tokio::test]
    async fn test_most_liked_film_comes_first() {
        let store = InMemoryStore::builder()
            .film(film(1, 1999))
            .film(film(2, 2005))
            .like(1, 2)
            .like(1, 1)
            .like(2, 1)
            .like(3, 1)
            .build();

        let films = service(store).popular_films(2, None, None).await.unwrap();

        assert_eq!(ids(&films), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_ties_and_unliked_films_order_by_id() {
        let store = InMemoryStore::builder()
            .film(film(4, 2000))
            .film(film(3, 2000))
            .film(film(2, 2000))
            .film(film(1, 2000))
            .like(1, 3)
            .like(1, 4)
            .build();

        let films = service(store).popular_films(10, None, None).await.unwrap();

        assert_eq!(ids(&films), vec![3, 4, 1, 2]);
    }

    #[tokio::test]
    async fn test_genre_filter_excludes_untagged_films() {
        let mut comedy = film(1, 2000);
        comedy.genres = vec![Genre::new(1, "Comedy")];
        let store = InMemoryStore::builder()
            .film(comedy)
            .film(film(2, 2000))
            .like(1, 2)
            .like(2, 2)
            .like(3, 2)
            .build();

        let films = service(store).popular_films(5, Some(1), None).await.unwrap();

        assert_eq!(ids(&films), vec![1]);
        assert_eq!(films[0].genres[0].name, "Comedy");
    }

    #[tokio::test]
    async fn test_filters_combine_with_and() {
        let mut old_comedy = film(1, 1990);
        old_comedy.genres = vec![Genre::new(1, "Comedy")];
        let mut new_comedy = film(2, 2010);
        new_comedy.genres = vec![Genre::new(1, "Comedy")];
        let store = InMemoryStore::builder()
            .film(old_comedy)
            .film(new_comedy)
            .film(film(3, 2010))
            .build();

        let films = service(store)
            .popular_films(5, Some(1), Some(2010))
            .await
            .unwrap();

        assert_eq!(ids(&films), vec![2]);
    }

    #[tokio::test]
    async fn test_non_positive_limit_is_rejected_before_any_lookup() {
        let mut films = MockFilmRepository::new();
        films.expect_find_filtered().never();

        let service = PopularityService::new(
            Arc::new(films),
            LikeGraph::new(Arc::new(MockLikeRepository::new())),
            MetadataEnricher::new(Arc::new(MockMetadataRepository::new())),
        );

        for limit in [0, -3] {
            let result = service.popular_films(limit, None, None).await;
            assert!(matches!(result, Err(AppError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_no_films_is_empty_not_error() {
        let films = service(InMemoryStore::builder().build())
            .popular_films(10, None, None)
            .await
            .unwrap();

        assert!(films.is_empty());
    }
}
