//! Injectable wall-clock time source.
//!
//! Every timed window in the engine (manager activation, cooldowns,
//! boost expiry, offline gaps) is computed against a [`Clock`] rather
//! than an ambient `now()`, so tests can drive time deterministically.
//! Timestamps are Unix-epoch milliseconds.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time in Unix-epoch milliseconds.
///
/// Implementations are not required to be monotonic; all window
/// comparisons in the engine tolerate a regressing clock by treating
/// windows as expired rather than panicking.
pub trait Clock {
    /// Current wall-clock time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// The production clock, backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // A system clock set before the epoch reads as 0.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
