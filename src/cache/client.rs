//! Caching wrapper for any transport
//!
//! Serves fresh stored responses and forwards everything else to the inner
//! transport, storing what the policy allows.

use async_trait::async_trait;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStore, cache_key, is_cacheable};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::transport::{Response, Transport};

/// Cached wrapper for any `Transport` implementation.
///
/// Each instance owns its own store, so several independently configured
/// caches can coexist in one process. The config is fixed at construction.
pub struct CacheMiddleware<T: Transport> {
    inner: T,
    config: CacheConfig,
    store: CacheStore,
}

impl<T: Transport> CacheMiddleware<T> {
    /// Wrap `inner` with an empty cache governed by `config`
    pub fn new(inner: T, config: CacheConfig) -> Self {
        Self {
            inner,
            config,
            store: CacheStore::new(),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get the inner transport
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Return a fresh stored response, evicting the entry if it is stale
    fn get_cached(&self, key: &str) -> Option<Response> {
        let entry = self.store.lookup(key)?;

        if entry.is_fresh_at(self.config.ttl, Instant::now()) {
            log::debug!("Cache hit: {}", key);
            return Some(entry.response);
        }

        log::debug!("Cache entry stale, evicting: {}", key);
        self.store.evict(key);
        None
    }
}

#[async_trait]
impl<T: Transport> Transport for CacheMiddleware<T> {
    async fn round_trip(&self, request: reqwest::Request) -> Result<Response> {
        let key = cache_key(&request);

        if let Some(cached) = self.get_cached(&key) {
            return Ok(cached);
        }
        log::trace!("Cache miss: {}", key);

        let method = request.method().clone();
        let response = self.inner.round_trip(request).await?;

        if is_cacheable(&method, response.status(), &self.config) {
            log::debug!("Caching {} {} ({})", method, key, response.status());
            self.store.store(key, CacheEntry::new(response.clone()));
        } else {
            log::debug!("Not caching {} {} ({})", method, key, response.status());
        }

        Ok(response)
    }
}
