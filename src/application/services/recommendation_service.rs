//! Nearest-neighbor film recommendations.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::MetadataEnricher;
use crate::domain::entities::Film;
use crate::domain::like_graph::LikeGraph;
use crate::domain::repositories::FilmRepository;
use crate::error::AppError;

/// Recommends films liked by the single most similar user.
///
/// Similarity is the number of liked films two users share. Only the top
/// neighbor contributes; there is no weighting across several neighbors.
pub struct RecommendationService {
    films: Arc<dyn FilmRepository>,
    graph: LikeGraph,
    enricher: MetadataEnricher,
}

impl RecommendationService {
    pub fn new(films: Arc<dyn FilmRepository>, graph: LikeGraph, enricher: MetadataEnricher) -> Self {
        Self {
            films,
            graph,
            enricher,
        }
    }

    /// Films the user's nearest neighbor likes that the user does not.
    ///
    /// Empty when the user likes nothing or shares no liked film with anyone.
    /// Ordered by film id ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    #[tracing::instrument(skip(self))]
    pub async fn recommended_films(&self, user_id: i64) -> Result<Vec<Film>, AppError> {
        let liked = self.graph.films_of(user_id).await?;
        if liked.is_empty() {
            return Ok(Vec::new());
        }

        let liked_ids: Vec<i64> = liked.iter().copied().collect();
        let likers = self.graph.likers_of_many(&liked_ids).await?;

        let Some((neighbor, overlap)) = nearest_neighbor(user_id, &likers) else {
            tracing::debug!("No user shares a liked film");
            return Ok(Vec::new());
        };
        tracing::debug!(neighbor, overlap, "Selected neighbor");

        let neighbor_likes = self.graph.films_of(neighbor).await?;
        let mut candidates: Vec<i64> = neighbor_likes.difference(&liked).copied().collect();
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        candidates.sort_unstable();

        let mut films = self.films.find_by_ids(&candidates).await?;
        films.sort_by_key(|film| film.id);

        self.enricher.enrich(films).await
    }
}

/// Picks the user sharing the most liked films with `user_id`.
///
/// `likers` maps each of the user's liked films to the users who like it.
/// Ties go to the lowest user id. Returns the neighbor and the overlap size.
fn nearest_neighbor(user_id: i64, likers: &HashMap<i64, HashSet<i64>>) -> Option<(i64, usize)> {
    let mut overlap: HashMap<i64, usize> = HashMap::new();
    for other in likers.values().flatten().filter(|&&other| other != user_id) {
        *overlap.entry(*other).or_default() += 1;
    }

    overlap
        .into_iter()
        .max_by_key(|&(other, shared)| (shared, Reverse(other)))
}
