//! Domain layer containing catalog entities and the like graph.
//!
//! This module holds everything the ranking core reasons about, independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Film, user, director, genre and MPA data structures
//! - [`repositories`] - Read-only data access trait definitions
//! - [`like_graph`] - Bipartite user-film like relation built on
//!   [`repositories::LikeRepository`]
//! - [`query`] - Closed enums for sort modes and search fields
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Ranking logic lives in services (see [`crate::application::services`])
//! - Nothing here mutates entities or edges; every query recomputes from the store

pub mod entities;
pub mod like_graph;
pub mod query;
pub mod repositories;
