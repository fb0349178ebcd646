//! In-process catalog store.
//!
//! [`InMemoryStore`] implements every repository trait over plain collections
//! behind a [`tokio::sync::RwLock`]. It is populated once, through
//! [`StoreBuilder`] or a JSON [`SeedData`] file, and then only read.
//!
//! # Usage
//!
//! ```rust,ignore
//! let store = InMemoryStore::builder()
//!     .film(matrix)
//!     .like(1, matrix_id)
//!     .build();
//! let repositories = Repositories::in_memory(Arc::new(store));
//! ```

pub mod seed;
pub mod store;

pub use seed::SeedData;
pub use store::{InMemoryStore, StoreBuilder};
