//! Memoize Module
//!
//! The two call conventions over one cache engine: a blocking facade
//! that returns inline and a suspending facade whose only suspension
//! point is the producer invocation.

mod future;
mod sync;

// Re-export public types
pub use future::AsyncMemoized;
pub use sync::Memoized;
