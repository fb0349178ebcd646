//! Set intersections between two users.

use std::sync::Arc;

use super::MetadataEnricher;
use crate::domain::entities::{Film, User};
use crate::domain::like_graph::LikeGraph;
use crate::domain::repositories::{FilmRepository, FriendRepository, UserRepository};
use crate::error::AppError;

/// Finds what two users have in common.
///
/// Neither operation checks that the users exist: an unknown user simply has
/// no likes and no friends, so the answer is an empty list.
pub struct OverlapService {
    films: Arc<dyn FilmRepository>,
    users: Arc<dyn UserRepository>,
    friends: Arc<dyn FriendRepository>,
    graph: LikeGraph,
    enricher: MetadataEnricher,
}

impl OverlapService {
    pub fn new(
        films: Arc<dyn FilmRepository>,
        users: Arc<dyn UserRepository>,
        friends: Arc<dyn FriendRepository>,
        graph: LikeGraph,
        enricher: MetadataEnricher,
    ) -> Self {
        Self {
            films,
            users,
            friends,
            graph,
            enricher,
        }
    }

    /// Films liked by both users.
    ///
    /// Ordered by total like count descending, ties by film id ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    #[tracing::instrument(skip(self))]
    pub async fn common_films(&self, user_id: i64, friend_id: i64) -> Result<Vec<Film>, AppError> {
        let (theirs, ours) = tokio::try_join!(
            self.graph.films_of(user_id),
            self.graph.films_of(friend_id),
        )?;

        let shared: Vec<i64> = theirs.intersection(&ours).copied().collect();
        tracing::debug!(shared = shared.len(), "Computed liked-film intersection");
        if shared.is_empty() {
            return Ok(Vec::new());
        }

        let films = self.films.find_by_ids(&shared).await?;
        let ranked = self.graph.rank_by_popularity(films).await?;

        self.enricher.enrich(ranked).await
    }

    /// Users both `user_id` and `other_id` have added as friends.
    ///
    /// Uses each user's outgoing friend edges. Ordered by user id ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    #[tracing::instrument(skip(self))]
    pub async fn common_friends(&self, user_id: i64, other_id: i64) -> Result<Vec<User>, AppError> {
        let (left, right) = tokio::try_join!(
            self.friends.friends_of(user_id),
            self.friends.friends_of(other_id),
        )?;

        let mut shared: Vec<i64> = left.intersection(&right).copied().collect();
        if shared.is_empty() {
            return Ok(Vec::new());
        }
        shared.sort_unstable();

        let mut users = self.users.find_by_ids(&shared).await?;
        users.sort_by_key(|user| user.id);
        Ok(users)
    }
}
