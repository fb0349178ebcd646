//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - In-process store implementing every repository trait,
//!   used by tests and by the `memory` store backend
//!
//! Both backends are read-only from the ranking core's point of view.

pub mod memory;
pub mod persistence;
