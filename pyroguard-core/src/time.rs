//! Time abstraction for the sampling loop and workflow deadlines
//!
//! All engine state lives against a caller-supplied clock so the whole
//! escalation workflow can be driven deterministically in tests. The two
//! provided sources cover both needs:
//! - `SystemTime`: wall clock, for live demos
//! - `FixedTime`: manually advanced, for tests

/// Timestamp in milliseconds since epoch (or an arbitrary test origin)
pub type Timestamp = u64;

/// Source of time for the engine
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;
}

/// System wall clock time source
#[derive(Debug, Clone)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a source frozen at the given timestamp
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Set the current timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut clock = FixedTime::new(1000);
        assert_eq!(clock.now(), 1000);

        clock.advance(500);
        assert_eq!(clock.now(), 1500);

        clock.set(0);
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn system_time_is_wall_clock() {
        let clock = SystemTime;
        assert!(clock.is_wall_clock());
        assert!(clock.now() > 0);
    }
}
