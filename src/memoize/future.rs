//! Suspending Call Facade
//!
//! Wraps an asynchronous producer in a private TTL/LRU cache shared by
//! cooperatively scheduled callers.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheEngine, CacheInfo};
use crate::config::CacheConfig;
use crate::error::{CallError, ConfigError};
use crate::key::CacheArg;

// == Shared State ==
/// Engine, producer and configuration behind one `Arc`, so clones of
/// the facade observe a single cache.
#[derive(Debug)]
struct Shared<R, F> {
    engine: Mutex<CacheEngine<R>>,
    producer: F,
    config: CacheConfig,
}

// == Async Memoized ==
/// A memoized asynchronous function.
///
/// The contract matches [`Memoized`](crate::Memoized), with the
/// producer invocation as the intended suspension point: lookup, insert,
/// eviction and statistics each run under one short lock acquisition
/// that is never held across the producer's await, so they are atomic
/// with respect to task interleaving.
///
/// Known limitation, kept deliberately: two concurrent callers that
/// both miss the same key each invoke the producer — misses are not
/// deduplicated, because coalescing them would change observable
/// producer call counts. The last producer to finish wins the cache
/// slot.
///
/// If a caller is cancelled while the producer is suspended, nothing is
/// inserted; the recorded miss stands and the cache is otherwise
/// unchanged.
///
/// Cloning is cheap and shares the underlying cache.
#[derive(Debug)]
pub struct AsyncMemoized<A, R, E, F, Fut> {
    shared: Arc<Shared<R, F>>,
    _call: PhantomData<fn(A) -> (E, Fut)>,
}

impl<A, R, E, F, Fut> Clone for AsyncMemoized<A, R, E, F, Fut> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            _call: PhantomData,
        }
    }
}

impl<A, R, E, F, Fut> AsyncMemoized<A, R, E, F, Fut>
where
    A: CacheArg,
    R: Clone,
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    // == Constructor ==
    /// Wraps `producer` in a cache built from `config`.
    pub fn new(config: CacheConfig, producer: F) -> Result<Self, ConfigError> {
        let engine = CacheEngine::new(&config)?;
        Ok(Self {
            shared: Arc::new(Shared {
                engine: Mutex::new(engine),
                producer,
                config,
            }),
            _call: PhantomData,
        })
    }

    // == Call ==
    /// The memoized entry point.
    ///
    /// Serves a live entry without suspending; on a miss the caller
    /// suspends until the producer's asynchronous work completes. A
    /// producer failure propagates unmodified and caches nothing.
    pub async fn call(&self, args: A) -> Result<R, CallError<E>> {
        let key = {
            let mut engine = self.shared.engine.lock().await;
            let key = engine.encode_args(&args)?;
            if let Some(value) = engine.probe(&key) {
                return Ok(value);
            }
            // miss recorded; release the lock before suspending so other
            // callers can proceed while the producer runs
            key
        };

        let value = (self.shared.producer)(args)
            .await
            .map_err(CallError::Producer)?;

        self.shared.engine.lock().await.admit(key, value.clone());
        Ok(value)
    }

    // == Call Uncached ==
    /// Invokes the wrapped producer directly, bypassing the cache.
    pub async fn call_uncached(&self, args: A) -> Result<R, E> {
        (self.shared.producer)(args).await
    }

    // == Cache Info ==
    /// Returns a read-only statistics snapshot after sweeping expired
    /// entries.
    pub async fn cache_info(&self) -> CacheInfo {
        self.shared.engine.lock().await.info()
    }

    // == Cache Clear ==
    /// Empties the cache and resets all counters. Idempotent.
    pub async fn cache_clear(&self) {
        self.shared.engine.lock().await.clear();
    }

    // == Config ==
    /// The configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.shared.config
    }

    // == Producer Access ==
    /// Borrows the wrapped producer.
    pub fn producer_ref(&self) -> &F {
        &self.shared.producer
    }
}
