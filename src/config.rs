//! Configuration Module
//!
//! Construction-time configuration for a memoization cache instance.

use std::time::Duration;

use crate::error::ConfigError;

/// Cache configuration parameters.
///
/// Supplied once when a cache is built and immutable for the cache's
/// lifetime. Use the chainable setters to adjust individual fields:
///
/// ```
/// use std::time::Duration;
/// use memottl::CacheConfig;
///
/// let config = CacheConfig::new(Duration::from_secs(30))
///     .with_max_size(128)
///     .with_typed(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Entries older than this are treated as absent
    pub ttl: Duration,
    /// Maximum number of entries; `None` disables capacity-based eviction
    pub max_size: Option<usize>,
    /// When true, the argument's type participates in key equality, so
    /// numerically equal values of different kinds cache separately
    pub typed: bool,
}

impl CacheConfig {
    /// Creates a configuration with the given TTL, no capacity bound and
    /// untyped keys.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            max_size: None,
            typed: false,
        }
    }

    /// Bounds the number of live entries. Exceeding the bound evicts the
    /// least recently used entry.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Makes the argument's type part of the cache key.
    pub fn with_typed(mut self, typed: bool) -> Self {
        self.typed = typed;
        self
    }

    /// Checks the configuration for values the cache cannot operate with.
    ///
    /// Rejects a zero TTL and a zero capacity bound. Facade constructors
    /// call this, so an invalid configuration never reaches a call path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl.is_zero() {
            return Err(ConfigError::ZeroTtl(self.ttl));
        }
        if self.max_size == Some(0) {
            return Err(ConfigError::ZeroMaxSize);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_size: None,
            typed: false,
        }
    }
}
