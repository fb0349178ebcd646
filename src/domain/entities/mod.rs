//! Core domain entities of the film catalog.
//!
//! Entities are plain data structures owned by the persistence collaborator.
//! The ranking core only reads them; it never creates, updates or deletes them.
//!
//! # Entity Types
//!
//! - [`Film`] - A catalogued film with its MPA rating and, once enriched,
//!   its genres and directors
//! - [`User`] - A catalog user; only the identifier matters to the like graph
//! - [`Director`] - A film director
//! - [`Genre`] - A film genre
//! - [`Mpa`] - A Motion Picture Association rating
//!
//! Films returned by repositories are "bare": their `genres` and `directors`
//! vectors are empty until [`crate::application::services::MetadataEnricher`]
//! fills them in one batch.

pub mod director;
pub mod film;
pub mod genre;
pub mod user;

pub use director::Director;
pub use film::{Film, Mpa};
pub use genre::Genre;
pub use user::User;
