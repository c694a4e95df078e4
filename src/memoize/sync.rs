//! Blocking Call Facade
//!
//! Wraps a synchronous producer in a private TTL/LRU cache.

use std::marker::PhantomData;

use crate::cache::{CacheEngine, CacheInfo};
use crate::config::CacheConfig;
use crate::error::{CallError, ConfigError};
use crate::key::CacheArg;

// == Memoized ==
/// A memoized synchronous function.
///
/// Each instance owns a private cache engine; nothing is shared across
/// instances or processes. Repeated calls with equal arguments inside
/// the TTL window return the cached result without running the producer.
///
/// This type assumes one logical caller: all methods take `&mut self`.
/// For use from multiple threads, wrap the whole instance in a mutex —
/// the cache performs no internal locking.
///
/// ```
/// use std::convert::Infallible;
/// use std::time::Duration;
/// use memottl::{CacheConfig, Memoized};
///
/// let mut square = Memoized::new(
///     CacheConfig::new(Duration::from_secs(60)),
///     |n: u64| Ok::<_, Infallible>(n * n),
/// )?;
///
/// assert_eq!(square.call(12)?, 144);
/// assert_eq!(square.call(12)?, 144); // served from cache
/// assert_eq!(square.cache_info().hits, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Memoized<A, R, E, F> {
    /// Private cache engine for this producer
    engine: CacheEngine<R>,
    /// The wrapped producer
    producer: F,
    /// Configuration the cache was built with
    config: CacheConfig,
    _call: PhantomData<fn(A) -> E>,
}

impl<A, R, E, F> Memoized<A, R, E, F>
where
    A: CacheArg,
    R: Clone,
    F: FnMut(A) -> Result<R, E>,
{
    // == Constructor ==
    /// Wraps `producer` in a cache built from `config`.
    ///
    /// Fails if the configuration is invalid; call paths never see an
    /// unvalidated configuration.
    pub fn new(config: CacheConfig, producer: F) -> Result<Self, ConfigError> {
        let engine = CacheEngine::new(&config)?;
        Ok(Self {
            engine,
            producer,
            config,
            _call: PhantomData,
        })
    }

    // == Call ==
    /// The memoized entry point.
    ///
    /// Computes the cache key, serves a live entry as a hit, and
    /// otherwise invokes the producer exactly once, caching its result.
    /// A producer failure propagates unmodified and caches nothing, so
    /// the next identical call retries the producer.
    pub fn call(&mut self, args: A) -> Result<R, CallError<E>> {
        let key = self.engine.encode_args(&args)?;

        if let Some(value) = self.engine.probe(&key) {
            return Ok(value);
        }

        let value = (self.producer)(args).map_err(CallError::Producer)?;
        self.engine.admit(key, value.clone());
        Ok(value)
    }

    // == Call Uncached ==
    /// Invokes the wrapped producer directly, bypassing the cache.
    ///
    /// Neither the statistics nor the stored entries are touched.
    pub fn call_uncached(&mut self, args: A) -> Result<R, E> {
        (self.producer)(args)
    }

    // == Cache Info ==
    /// Returns a read-only statistics snapshot.
    ///
    /// Takes `&mut self` because expired entries are swept before the
    /// snapshot is taken.
    pub fn cache_info(&mut self) -> CacheInfo {
        self.engine.info()
    }

    // == Cache Clear ==
    /// Empties the cache and resets all counters. Idempotent.
    pub fn cache_clear(&mut self) {
        self.engine.clear();
    }

    // == Config ==
    /// The configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Producer Access ==
    /// Borrows the wrapped producer.
    pub fn producer_ref(&self) -> &F {
        &self.producer
    }

    /// Consumes the wrapper, returning the original producer.
    pub fn into_producer(self) -> F {
        self.producer
    }
}
