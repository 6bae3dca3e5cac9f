//! Durable key-value storage for the storefront.
//!
//! Provides a small storage abstraction standing in for per-origin browser
//! storage, with an in-memory backend for tests and a file-backed backend
//! that survives process restarts. Values are stored as JSON.
//!
//! # Example
//!
//! ```rust
//! use storefront_store::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Counter {
//!     hits: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set("counter", &Counter { hits: 3 }).unwrap();
//! let counter: Option<Counter> = cache.get("counter").unwrap();
//! assert_eq!(counter, Some(Counter { hits: 3 }));
//!
//! cache.delete("counter").unwrap();
//! ```

mod error;
mod file;
mod kv;
mod memory;
mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::Cache;
pub use memory::MemoryStore;
pub use store::{validate_key, KeyValueStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, FileStore, KeyValueStore, MemoryStore, StoreError};
}
