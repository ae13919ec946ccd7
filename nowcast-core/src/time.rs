//! Time sources for sample timestamps
//!
//! Callers normally stamp their own readings. When they don't, the engine asks
//! its clock:
//! - System clock (when std is available)
//! - Fixed clock (tests, replay of recorded sessions)
//!
//! Pruning never consults the clock, only the timestamps of the samples.

pub use crate::sample::Timestamp;

/// Source of the current time, in seconds
pub trait TimeSource {
    /// Current timestamp in seconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64()
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing and replay
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    /// Clock stopped at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `seconds`
    pub fn advance(&mut self, seconds: f64) {
        self.timestamp += seconds;
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
