//! In-memory response cache
//!
//! Stores buffered responses keyed by request URL and serves them until they
//! are older than the configured TTL. Stale entries are dropped lazily, on the
//! next access to the same key.

pub mod client;
pub mod key;
pub mod policy;
pub mod storage;

// Re-export main types
pub use client::CacheMiddleware;
pub use key::cache_key;
pub use policy::is_cacheable;
pub use storage::{CacheEntry, CacheStore};
