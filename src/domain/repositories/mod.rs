//! Repository trait definitions for the domain layer.
//!
//! These traits are the read-only interface of the persistence collaborator.
//! Concrete repositories live in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - PostgreSQL implementations live in `crate::infrastructure::persistence`
//! - An in-memory implementation lives in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`FilmRepository`] - Film lookups and filtered listings
//! - [`LikeRepository`] - The user-film like relation
//! - [`MetadataRepository`] - Batch genre and director associations
//! - [`DirectorRepository`] - Director lookups
//! - [`UserRepository`] - User lookups
//! - [`FriendRepository`] - The directed friend relation
//!
//! Lookups of unknown ids return empty collections or `None`; the repositories
//! never police referential existence.

pub mod director_repository;
pub mod film_repository;
pub mod friend_repository;
pub mod like_repository;
pub mod metadata_repository;
pub mod user_repository;

pub use director_repository::DirectorRepository;
pub use film_repository::{FilmFilter, FilmRepository};
pub use friend_repository::FriendRepository;
pub use like_repository::LikeRepository;
pub use metadata_repository::MetadataRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use director_repository::MockDirectorRepository;
#[cfg(test)]
pub use film_repository::MockFilmRepository;
#[cfg(test)]
pub use friend_repository::MockFriendRepository;
#[cfg(test)]
pub use like_repository::MockLikeRepository;
#[cfg(test)]
pub use metadata_repository::MockMetadataRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
