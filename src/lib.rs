//! rtcache - transparent TTL cache for HTTP round trips
//!
//! Wrap any [`Transport`] in a [`CacheMiddleware`] and use it in its place:
//!
//! ```no_run
//! # async fn demo() -> rtcache::Result<()> {
//! use std::time::Duration;
//! use rtcache::{CacheConfig, CacheMiddleware, HttpTransport, Transport};
//!
//! let transport = HttpTransport::new()?;
//! let request = transport.client().get("http://example.com/").build()?;
//!
//! let cache = CacheMiddleware::new(transport, CacheConfig::new().ttl(Duration::from_secs(5)));
//! let response = cache.round_trip(request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod transport;

pub use cache::{CacheEntry, CacheMiddleware, CacheStore, cache_key, is_cacheable};
pub use config::CacheConfig;
pub use error::{ConfigError, Error, Result, TransportError};
pub use transport::{HttpTransport, Response, Transport};
