//! Repository trait for the friend relation.

use std::collections::HashSet;

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for friend edges.
///
/// Friendship is directed: adding `b` as a friend of `a` records only the edge
/// `a -> b`. [`FriendRepository::friends_of`] returns outgoing edges.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendRepository: Send + Sync {
    /// Returns the ids of users that `user_id` has added as friends.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn friends_of(&self, user_id: i64) -> Result<HashSet<i64>, AppError>;
}
