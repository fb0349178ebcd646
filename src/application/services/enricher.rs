//! Batch attachment of genres and directors to result lists.

use std::sync::Arc;

use crate::domain::entities::Film;
use crate::domain::repositories::MetadataRepository;
use crate::error::AppError;

/// Attaches genres and directors to a list of bare films.
///
/// Issues exactly one genre lookup and one director lookup per call, both
/// covering the whole list, and none at all for an empty list. The output
/// keeps the input order.
#[derive(Clone)]
pub struct MetadataEnricher {
    metadata: Arc<dyn MetadataRepository>,
}

impl MetadataEnricher {
    pub fn new(metadata: Arc<dyn MetadataRepository>) -> Self {
        Self { metadata }
    }

    /// Returns `films` with genres and directors attached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either batch lookup fails.
    pub async fn enrich(&self, mut films: Vec<Film>) -> Result<Vec<Film>, AppError> {
        if films.is_empty() {
            return Ok(films);
        }

        let ids: Vec<i64> = films.iter().map(|film| film.id).collect();
        let (genres, directors) = tokio::try_join!(
            self.metadata.genres_for_films(&ids),
            self.metadata.directors_for_films(&ids),
        )?;

        for film in &mut films {
            let mut film_genres = genres.get(&film.id).cloned().unwrap_or_default();
            film_genres.sort_by_key(|genre| genre.id);
            film_genres.dedup_by_key(|genre| genre.id);
            film.genres = film_genres;

            let mut film_directors = directors.get(&film.id).cloned().unwrap_or_default();
            film_directors.sort_by_key(|director| director.id);
            film_directors.dedup_by_key(|director| director.id);
            film.directors = film_directors;
        }

        tracing::debug!(films = films.len(), "Enriched result list");
        Ok(films)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Director, Genre, Mpa};
    use crate::domain::repositories::MockMetadataRepository;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn film(id: i64) -> Film {
        Film::new(
            id,
            format!("Film {id}"),
            "",
            NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
            100,
            Mpa::new(1, "G"),
        )
    }

    #[tokio::test]
    async fn test_enrich_issues_one_lookup_per_association() {
        let mut mock_repo = MockMetadataRepository::new();

        mock_repo
            .expect_genres_for_films()
            .withf(|ids| ids.to_vec() == vec![3, 1, 2])
            .times(1)
            .returning(|_| {
                Ok(HashMap::from([
                    (1, vec![Genre::new(2, "Drama"), Genre::new(1, "Comedy")]),
                    (3, vec![Genre::new(6, "Action")]),
                ]))
            });
        mock_repo
            .expect_directors_for_films()
            .times(1)
            .returning(|_| Ok(HashMap::from([(2, vec![Director::new(9, "Nolan")])])));

        let enricher = MetadataEnricher::new(Arc::new(mock_repo));
        let films = enricher
            .enrich(vec![film(3), film(1), film(2)])
            .await
            .unwrap();

        let ids: Vec<i64> = films.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let genre_ids: Vec<i64> = films[1].genres.iter().map(|g| g.id).collect();
        assert_eq!(genre_ids, vec![1, 2]);
        assert_eq!(films[0].genres[0].name, "Action");
        assert!(films[2].genres.is_empty());
        assert_eq!(films[2].directors[0].name, "Nolan");
        assert!(films[0].directors.is_empty());
    }

    #[tokio::test]
    async fn test_enrich_empty_input_skips_lookups() {
        let mut mock_repo = MockMetadataRepository::new();
        mock_repo.expect_genres_for_films().never();
        mock_repo.expect_directors_for_films().never();

        let enricher = MetadataEnricher::new(Arc::new(mock_repo));

        assert!(enricher.enrich(Vec::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_enrich_removes_duplicate_genres() {
        let mut mock_repo = MockMetadataRepository::new();
        mock_repo.expect_genres_for_films().returning(|_| {
            Ok(HashMap::from([(
                1,
                vec![Genre::new(1, "Comedy"), Genre::new(1, "Comedy")],
            )]))
        });
        mock_repo
            .expect_directors_for_films()
            .returning(|_| Ok(HashMap::new()));

        let enricher = MetadataEnricher::new(Arc::new(mock_repo));
        let films = enricher.enrich(vec![film(1)]).await.unwrap();

        assert_eq!(films[0].genres.len(), 1);
    }

    #[tokio::test]
    async fn test_enrich_propagates_lookup_failure() {
        let mut mock_repo = MockMetadataRepository::new();
        mock_repo
            .expect_genres_for_films()
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));
        mock_repo
            .expect_directors_for_films()
            .returning(|_| Ok(HashMap::new()));

        let enricher = MetadataEnricher::new(Arc::new(mock_repo));

        assert!(matches!(
            enricher.enrich(vec![film(1)]).await,
            Err(AppError::Internal { .. })
        ));
    }
}
