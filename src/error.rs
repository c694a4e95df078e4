//! Error types for the memoization cache
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Config Error Enum ==
/// Rejected configuration, reported at construction time.
///
/// A cache is never built from an invalid configuration, so the call
/// paths only ever see a validated `CacheConfig`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// TTL must be a positive duration
    #[error("ttl must be greater than zero, got {0:?}")]
    ZeroTtl(Duration),

    /// A capacity bound, when set, must allow at least one entry
    #[error("max_size must be greater than zero when set")]
    ZeroMaxSize,
}

// == Key Error Enum ==
/// Failure to derive a cache key from call arguments.
///
/// Most argument kinds that cannot act as keys are rejected at compile
/// time by the `CacheArg` bound; the remaining runtime case is a float
/// without stable equality.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Argument cannot participate in a stable cache key
    #[error("unhashable argument of type {type_name}: {reason}")]
    Unhashable {
        /// Type of the offending argument
        type_name: &'static str,
        /// Why the value has no stable key encoding
        reason: &'static str,
    },
}

// == Call Error Enum ==
/// Error surface of a single memoized call.
///
/// Producer failures are carried verbatim: they are never cached and a
/// subsequent call with the same arguments runs the producer again.
#[derive(Error, Debug)]
pub enum CallError<E> {
    /// The arguments could not be encoded into a cache key
    #[error(transparent)]
    Key(#[from] KeyError),

    /// The wrapped producer failed; the failure is propagated unmodified
    #[error("producer failed")]
    Producer(E),
}

impl<E> CallError<E> {
    /// Returns the producer failure, if that is what this error is.
    pub fn into_producer_error(self) -> Option<E> {
        match self {
            CallError::Producer(err) => Some(err),
            CallError::Key(_) => None,
        }
    }
}
