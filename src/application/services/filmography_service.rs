//! Per-director filmographies.

use std::sync::Arc;

use serde_json::json;

use super::MetadataEnricher;
use crate::domain::entities::Film;
use crate::domain::like_graph::LikeGraph;
use crate::domain::query::DirectorSort;
use crate::domain::repositories::{DirectorRepository, FilmRepository};
use crate::error::AppError;

/// Lists the films a director is credited on, in a chosen order.
pub struct FilmographyService {
    films: Arc<dyn FilmRepository>,
    directors: Arc<dyn DirectorRepository>,
    graph: LikeGraph,
    enricher: MetadataEnricher,
}

impl FilmographyService {
    pub fn new(
        films: Arc<dyn FilmRepository>,
        directors: Arc<dyn DirectorRepository>,
        graph: LikeGraph,
        enricher: MetadataEnricher,
    ) -> Self {
        Self {
            films,
            directors,
            graph,
            enricher,
        }
    }

    /// Returns the director's films ordered by `sort`.
    ///
    /// [`DirectorSort::Likes`] orders by like count descending,
    /// [`DirectorSort::Year`] by release year ascending. Ties fall back to
    /// film id ascending in both modes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the director does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    #[tracing::instrument(skip(self))]
    pub async fn director_films(
        &self,
        director_id: i64,
        sort: DirectorSort,
    ) -> Result<Vec<Film>, AppError> {
        let (director, mut films) = tokio::try_join!(
            self.directors.find_by_id(director_id),
            self.films.find_by_director(director_id),
        )?;

        if director.is_none() {
            return Err(AppError::not_found(
                "Director not found",
                json!({ "director_id": director_id }),
            ));
        }

        let ordered = match sort {
            DirectorSort::Likes => self.graph.rank_by_popularity(films).await?,
            DirectorSort::Year => {
                films.sort_by_key(|film| (film.release_year(), film.id));
                films
            }
        };
        tracing::debug!(films = ordered.len(), "Filmography ordered");

        self.enricher.enrich(ordered).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Director, Mpa};
    use crate::infrastructure::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn film(id: i64, year: i32) -> Film {
        let mut film = Film::new(
            id,
            format!("Film {id}"),
            "",
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            100,
            Mpa::new(1, "G"),
        );
        film.directors = vec![Director::new(7, "Kubrick")];
        film
    }

    fn service(store: InMemoryStore) -> FilmographyService {
        let store = Arc::new(store);
        FilmographyService::new(
            store.clone(),
            store.clone(),
            LikeGraph::new(store.clone()),
            MetadataEnricher::new(store),
        )
    }

    fn store() -> InMemoryStore {
        InMemoryStore::builder()
            .film(film(1, 2005))
            .film(film(2, 1990))
            .film(film(3, 1990))
            .film(Film::new(
                4,
                "Uncredited",
                "",
                NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                90,
                Mpa::new(1, "G"),
            ))
            .like(1, 1)
            .like(2, 1)
            .like(1, 3)
            .build()
    }

    fn ids(films: &[Film]) -> Vec<i64> {
        films.iter().map(|f| f.id).collect()
    }

    #[tokio::test]
    async fn test_year_sort_is_non_decreasing() {
        let films = service(store())
            .director_films(7, DirectorSort::Year)
            .await
            .unwrap();

        assert_eq!(ids(&films), vec![2, 3, 1]);
        assert!(films
            .windows(2)
            .all(|pair| pair[0].release_year() <= pair[1].release_year()));
    }

    #[tokio::test]
    async fn test_likes_sort_orders_by_popularity() {
        let films = service(store())
            .director_films(7, DirectorSort::Likes)
            .await
            .unwrap();

        assert_eq!(ids(&films), vec![1, 3, 2]);
        assert_eq!(films[0].directors[0].name, "Kubrick");
    }

    #[tokio::test]
    async fn test_unknown_director_is_not_found() {
        let result = service(store())
            .director_films(99, DirectorSort::Year)
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_director_without_films_is_empty() {
        let store = InMemoryStore::builder()
            .director(Director::new(5, "Newcomer"))
            .build();

        let films = service(store)
            .director_films(5, DirectorSort::Likes)
            .await
            .unwrap();

        assert!(films.is_empty());
    }
}
