//! memottl - A TTL-bounded, size-bounded memoization cache
//!
//! Wraps a function (synchronous or asynchronous) so that repeated calls
//! with equal arguments return the previously computed result, as long
//! as the entry has neither expired nor been evicted for capacity.
//!
//! - **Exact expiry**: every entry lives for exactly the configured TTL
//!   from its own insertion; expired entries are swept lazily on reads.
//! - **True LRU eviction**: when a capacity bound is set, a hit
//!   refreshes the entry and overflow evicts the least recently used.
//! - **Monotonic statistics**: hit/miss/eviction counters, current size
//!   and the remaining TTL of the soonest-to-expire entry, resettable
//!   only through [`Memoized::cache_clear`] /
//!   [`AsyncMemoized::cache_clear`].
//!
//! ```
//! use std::convert::Infallible;
//! use std::time::Duration;
//! use memottl::{CacheConfig, Memoized};
//!
//! let mut lookup = Memoized::new(
//!     CacheConfig::new(Duration::from_secs(30)).with_max_size(64),
//!     |name: String| Ok::<_, Infallible>(format!("profile of {name}")),
//! )?;
//!
//! let first = lookup.call("ada".to_string())?;   // runs the producer
//! let second = lookup.call("ada".to_string())?;  // served from cache
//! assert_eq!(first, second);
//! assert_eq!(lookup.cache_info().hits, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cache;
mod clock;
pub mod config;
pub mod error;
pub mod key;
pub mod memoize;

pub use cache::CacheInfo;
pub use config::CacheConfig;
pub use error::{CallError, ConfigError, KeyError};
pub use key::{CacheArg, CacheKey, KeyAtom, KeyCodec};
pub use memoize::{AsyncMemoized, Memoized};
