//! Cache configuration

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default freshness window
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache configuration, fixed for the lifetime of a cache instance.
///
/// ```yaml
/// ttl: 5
/// cacheable_methods: [GET, HEAD]
/// cacheable_status_codes: [200, 203]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Freshness window, in seconds when serialized
    #[serde(with = "ttl_secs")]
    pub ttl: Duration,

    /// HTTP methods whose exchanges may be stored
    pub cacheable_methods: HashSet<String>,

    /// Response status codes that may be stored
    pub cacheable_status_codes: HashSet<u16>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            cacheable_methods: HashSet::from(["GET".to_string()]),
            cacheable_status_codes: HashSet::from([200]),
        }
    }
}

impl CacheConfig {
    /// Create a config with the defaults (5 min, GET, 200)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the freshness window.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Replace the method allow-list. Names match request methods exactly,
    /// so `"get"` does not allow `GET`.
    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cacheable_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the status code allow-list.
    pub fn status_codes<I>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        self.cacheable_status_codes = codes.into_iter().collect();
        self
    }

    /// Load configuration from a specific path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: CacheConfig = serde_yaml::from_str(contents).map_err(ConfigError::from)?;
        config.validated()
    }

    /// Reject unusable allow-list entries.
    pub fn validated(self) -> Result<Self> {
        if self.cacheable_methods.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::Invalid("empty HTTP method in cacheable_methods".into()).into());
        }

        if let Some(code) = self
            .cacheable_status_codes
            .iter()
            .find(|c| !(100..=999).contains(*c))
        {
            return Err(ConfigError::Invalid(format!("status code {} out of range", code)).into());
        }

        Ok(self)
    }
}

/// Serialize a `Duration` as fractional seconds
mod ttl_secs {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(ttl.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs)
            .map_err(|_| D::Error::custom(format!("invalid ttl: {}", secs)))
    }
}
