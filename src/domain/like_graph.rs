//! Read-only view of the bipartite user-film like relation.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::entities::Film;
use crate::domain::repositories::LikeRepository;
use crate::error::AppError;

/// The like graph every ranking query reads from.
///
/// Thin, cloneable wrapper over a [`LikeRepository`] that adds popularity
/// ordering. Unknown users and films have no edges; asking about them yields
/// empty sets and zero counts.
#[derive(Clone)]
pub struct LikeGraph {
    likes: Arc<dyn LikeRepository>,
}

impl LikeGraph {
    pub fn new(likes: Arc<dyn LikeRepository>) -> Self {
        Self { likes }
    }

    /// Users who like the film.
    pub async fn likers_of(&self, film_id: i64) -> Result<HashSet<i64>, AppError> {
        self.likes.likers_of_film(film_id).await
    }

    /// Films the user likes.
    pub async fn films_of(&self, user_id: i64) -> Result<HashSet<i64>, AppError> {
        self.likes.films_liked_by(user_id).await
    }

    /// Popularity of a single film.
    pub async fn like_count(&self, film_id: i64) -> Result<u64, AppError> {
        let counts = self.likes.like_counts(&[film_id]).await?;
        Ok(counts.get(&film_id).copied().unwrap_or(0))
    }

    /// Popularity of many films in one lookup.
    pub async fn like_counts(&self, film_ids: &[i64]) -> Result<HashMap<i64, u64>, AppError> {
        if film_ids.is_empty() {
            return Ok(HashMap::new());
        }
        self.likes.like_counts(film_ids).await
    }

    /// Liker sets of many films in one lookup.
    pub async fn likers_of_many(
        &self,
        film_ids: &[i64],
    ) -> Result<HashMap<i64, HashSet<i64>>, AppError> {
        if film_ids.is_empty() {
            return Ok(HashMap::new());
        }
        self.likes.likers_of_films(film_ids).await
    }

    /// Orders films by like count descending, ties by film id ascending.
    pub async fn rank_by_popularity(&self, mut films: Vec<Film>) -> Result<Vec<Film>, AppError> {
        let ids: Vec<i64> = films.iter().map(|film| film.id).collect();
        let counts = self.like_counts(&ids).await?;
        sort_by_popularity(&mut films, &counts);
        Ok(films)
    }
}

/// Sorts films by like count descending, ties by film id ascending.
///
/// Films missing from `counts` have zero likes.
pub fn sort_by_popularity(films: &mut [Film], counts: &HashMap<i64, u64>) {
    films.sort_by_key(|film| (Reverse(counts.get(&film.id).copied().unwrap_or(0)), film.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Mpa;
    use crate::domain::repositories::MockLikeRepository;
    use chrono::NaiveDate;

    fn film(id: i64) -> Film {
        Film::new(
            id,
            format!("Film {id}"),
            "",
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            90,
            Mpa::new(1, "G"),
        )
    }

    #[test]
    fn test_sort_by_popularity_breaks_ties_by_id() {
        let mut films = vec![film(3), film(1), film(2), film(4)];
        let counts = HashMap::from([(1, 5), (2, 7), (3, 5)]);

        sort_by_popularity(&mut films, &counts);

        let ids: Vec<i64> = films.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[tokio::test]
    async fn test_like_count_of_unknown_film_is_zero() {
        let mut mock_repo = MockLikeRepository::new();
        mock_repo
            .expect_like_counts()
            .times(1)
            .returning(|_| Ok(HashMap::new()));

        let graph = LikeGraph::new(Arc::new(mock_repo));

        assert_eq!(graph.like_count(42).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_batches_skip_the_store() {
        let mut mock_repo = MockLikeRepository::new();
        mock_repo.expect_like_counts().never();
        mock_repo.expect_likers_of_films().never();

        let graph = LikeGraph::new(Arc::new(mock_repo));

        assert!(graph.like_counts(&[]).await.unwrap().is_empty());
        assert!(graph.likers_of_many(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rank_by_popularity_uses_one_count_lookup() {
        let mut mock_repo = MockLikeRepository::new();
        mock_repo
            .expect_like_counts()
            .times(1)
            .returning(|_| Ok(HashMap::from([(1, 1), (2, 3)])));

        let graph = LikeGraph::new(Arc::new(mock_repo));
        let ranked = graph.rank_by_popularity(vec![film(1), film(2)]).await.unwrap();

        assert_eq!(ranked[0].id, 2);
        assert_eq!(ranked[1].id, 1);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut mock_repo = MockLikeRepository::new();
        mock_repo
            .expect_films_liked_by()
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));

        let graph = LikeGraph::new(Arc::new(mock_repo));

        assert!(matches!(
            graph.films_of(1).await,
            Err(AppError::Internal { .. })
        ));
    }
}
