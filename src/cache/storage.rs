//! In-memory concurrent cache storage
//!
//! A key-addressed map with point operations only. Each call is atomic on
//! its own; a lookup followed by an evict or store from the same caller is
//! not, and concurrent callers may interleave between them.

use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

use crate::transport::Response;

/// A stored response and the moment it was stored
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub response: Response,
    pub stored_at: Instant,
}

impl CacheEntry {
    /// Capture `response` as stored now
    pub fn new(response: Response) -> Self {
        Self::stored_at(response, Instant::now())
    }

    pub fn stored_at(response: Response, stored_at: Instant) -> Self {
        Self {
            response,
            stored_at,
        }
    }

    /// Fresh while strictly younger than `ttl` at `now`
    pub fn is_fresh_at(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) < ttl
    }
}

/// Concurrent map from cache key to entry.
///
/// Entries live until evicted or overwritten; there is no capacity bound
/// and no background sweep.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: DashMap<String, CacheEntry>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the entry under `key`
    pub fn lookup(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Insert or overwrite; the last writer wins
    pub fn store(&self, key: impl Into<String>, entry: CacheEntry) {
        self.entries.insert(key.into(), entry);
    }

    /// Remove the entry under `key`, if any
    pub fn evict(&self, key: &str) {
        self.entries.remove(key);
    }
}
