//! HTTP middleware.
//!
//! - [`tracing`] - Request/response logging

pub mod tracing;
