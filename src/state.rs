//! Shared application state and repository wiring.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::application::services::{
    FilmographyService, MetadataEnricher, OverlapService, PopularityService,
    RecommendationService, SearchService,
};
use crate::domain::like_graph::LikeGraph;
use crate::domain::repositories::{
    DirectorRepository, FilmRepository, FriendRepository, LikeRepository, MetadataRepository,
    UserRepository,
};
use crate::infrastructure::memory::InMemoryStore;
use crate::infrastructure::persistence::{
    PgDirectorRepository, PgFilmRepository, PgFriendRepository, PgLikeRepository,
    PgMetadataRepository, PgUserRepository,
};

/// The set of repositories services are built from.
///
/// Every field is a trait object, so one backend can be swapped for another
/// without touching the services.
#[derive(Clone)]
pub struct Repositories {
    pub films: Arc<dyn FilmRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub metadata: Arc<dyn MetadataRepository>,
    pub directors: Arc<dyn DirectorRepository>,
    pub users: Arc<dyn UserRepository>,
    pub friends: Arc<dyn FriendRepository>,
}

impl Repositories {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            films: Arc::new(PgFilmRepository::new(pool.clone())),
            likes: Arc::new(PgLikeRepository::new(pool.clone())),
            metadata: Arc::new(PgMetadataRepository::new(pool.clone())),
            directors: Arc::new(PgDirectorRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            friends: Arc::new(PgFriendRepository::new(pool)),
        }
    }

    /// Every repository backed by the same in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            films: store.clone(),
            likes: store.clone(),
            metadata: store.clone(),
            directors: store.clone(),
            users: store.clone(),
            friends: store,
        }
    }
}

/// State injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub popularity_service: Arc<PopularityService>,
    pub filmography_service: Arc<FilmographyService>,
    pub overlap_service: Arc<OverlapService>,
    pub recommendation_service: Arc<RecommendationService>,
    pub search_service: Arc<SearchService>,
    /// Used by the health check to probe the store.
    pub films: Arc<dyn FilmRepository>,
    pub query_timeout: Duration,
}

impl AppState {
    /// Builds every service over the given repositories.
    pub fn new(repositories: Repositories, query_timeout: Duration) -> Self {
        let graph = LikeGraph::new(repositories.likes.clone());
        let enricher = MetadataEnricher::new(repositories.metadata.clone());

        Self {
            popularity_service: Arc::new(PopularityService::new(
                repositories.films.clone(),
                graph.clone(),
                enricher.clone(),
            )),
            filmography_service: Arc::new(FilmographyService::new(
                repositories.films.clone(),
                repositories.directors.clone(),
                graph.clone(),
                enricher.clone(),
            )),
            overlap_service: Arc::new(OverlapService::new(
                repositories.films.clone(),
                repositories.users.clone(),
                repositories.friends.clone(),
                graph.clone(),
                enricher.clone(),
            )),
            recommendation_service: Arc::new(RecommendationService::new(
                repositories.films.clone(),
                graph.clone(),
                enricher.clone(),
            )),
            search_service: Arc::new(SearchService::new(
                repositories.films.clone(),
                repositories.metadata.clone(),
                graph,
                enricher,
            )),
            films: repositories.films,
            query_timeout,
        }
    }
}
