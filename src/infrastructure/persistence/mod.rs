//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! checked at runtime (`query_as` with [`sqlx::FromRow`] rows) so the crate
//! builds without a live database; batch lookups bind the whole id list as a
//! Postgres array and filter with `= ANY($1)`.
//!
//! # Repositories
//!
//! - [`PgFilmRepository`] - Film lookups and filtered listings
//! - [`PgLikeRepository`] - Like edges and per-film counts
//! - [`PgMetadataRepository`] - Batch genre and director associations
//! - [`PgDirectorRepository`] - Director lookups
//! - [`PgUserRepository`] - User lookups
//! - [`PgFriendRepository`] - Directed friend edges

pub mod pg_director_repository;
pub mod pg_film_repository;
pub mod pg_friend_repository;
pub mod pg_like_repository;
pub mod pg_metadata_repository;
pub mod pg_user_repository;

pub use pg_director_repository::PgDirectorRepository;
pub use pg_film_repository::PgFilmRepository;
pub use pg_friend_repository::PgFriendRepository;
pub use pg_like_repository::PgLikeRepository;
pub use pg_metadata_repository::PgMetadataRepository;
pub use pg_user_repository::PgUserRepository;
