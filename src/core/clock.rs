//! Wall-clock time source, injectable for testability
//!
//! The simulation never reads the system clock directly. Callers hand the
//! current timestamp (seconds since the Unix epoch) into `run_update` and the
//! action handlers, usually obtained through one of these sources.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// A monotonically non-decreasing source of wall-clock timestamps
pub trait Clock {
    /// Current time as seconds since the Unix epoch
    fn now(&self) -> f64;
}

/// Real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Manually advanced clock for tests and replay
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Advance the clock by `seconds`
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(100.0);
        assert_eq!(clock.now(), 100.0);
        clock.advance(2.5);
        assert_eq!(clock.now(), 102.5);
    }

    #[test]
    fn test_system_clock_non_decreasing() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
