//! Cache key derivation

use reqwest::Request;

/// Derive the cache key for a request.
///
/// The key is the absolute request URL (scheme, host, path and query) as a
/// string. Method and headers are not part of the key, so a `POST` and a
/// `GET` to the same URL share one slot.
pub fn cache_key(request: &Request) -> String {
    request.url().as_str().to_owned()
}
