//! Time Source Module
//!
//! All expiry arithmetic goes through this module's `Instant`. Under
//! `cfg(test)` it resolves to `mock_instant::Instant`, so unit tests can
//! drive time deterministically with `mock_instant::MockClock::advance`
//! instead of sleeping.

#[cfg(test)]
pub(crate) use mock_instant::global::Instant;
#[cfg(not(test))]
pub(crate) use std::time::Instant;

/// Returns the current instant from the active time source.
pub(crate) fn now() -> Instant {
    Instant::now()
}
