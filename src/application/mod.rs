//! Application layer services implementing the ranking queries.
//!
//! Services combine the like graph with the catalog repositories, apply
//! ordering rules, and enrich result lists with genres and directors before
//! handing them to HTTP handlers or the admin CLI.
//!
//! # Available Services
//!
//! - [`services::PopularityService`] - Global popularity rankings
//! - [`services::FilmographyService`] - Per-director filmographies
//! - [`services::OverlapService`] - Films and friends two users share
//! - [`services::RecommendationService`] - Nearest-neighbor recommendations
//! - [`services::SearchService`] - Free-text title and director search
//!
//! Every top-level call is expected to go through [`query::run_query`], which
//! applies the per-query deadline and records metrics.

pub mod query;
pub mod services;
