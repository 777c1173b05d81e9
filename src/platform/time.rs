//! Millisecond clocks
//!
//! The simulation never reads the wall clock directly. Timers and frame
//! limiters take a [`Clock`], so tests and replays can drive time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

/// A monotonic millisecond clock that can also wait
pub trait Clock {
    /// Milliseconds since the clock's epoch
    fn ticks_ms(&self) -> u64;

    /// Block for `ms` milliseconds
    fn delay(&self, ms: u64);
}

/// Real time, measured from when the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn delay(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// A clock that only moves when told to
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the timer under test. `delay` advances the shared time
/// instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn ticks_ms(&self) -> u64 {
        self.now.get()
    }

    fn delay(&self, ms: u64) {
        self.advance(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(40);
        assert_eq!(clock.ticks_ms(), 40);
        clock.delay(10);
        assert_eq!(handle.ticks_ms(), 50);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.ticks_ms();
        clock.delay(5);
        let b = clock.ticks_ms();
        assert!(b >= a + 5);
    }
}
