//! Ranking and recommendation services.

pub mod enricher;
pub mod filmography_service;
pub mod overlap_service;
pub mod popularity_service;
pub mod recommendation_service;
pub mod search_service;

pub use enricher::MetadataEnricher;
pub use filmography_service::FilmographyService;
pub use overlap_service::OverlapService;
pub use popularity_service::PopularityService;
pub use recommendation_service::RecommendationService;
pub use search_service::SearchService;
