//! Cacheability policy

use reqwest::{Method, StatusCode};

use crate::config::CacheConfig;

/// Decide whether an exchange may be stored.
///
/// True iff the request method and the response status are both on the
/// configured allow-lists. Empty allow-lists reject everything.
pub fn is_cacheable(method: &Method, status: StatusCode, config: &CacheConfig) -> bool {
    config.cacheable_methods.contains(method.as_str())
        && config.cacheable_status_codes.contains(&status.as_u16())
}
