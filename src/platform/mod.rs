//! Platform layer
//!
//! Owns time for the native loop: the sim only ever sees whole ticks, so
//! pacing is confined here.

use std::time::{Duration, Instant};

use crate::consts::TICK_HZ;

/// Fixed-rate clock: one `wait()` per simulation tick
///
/// Deadline-based rather than sleep-per-frame, so a slow tick does not drift
/// the cadence; a very late frame resets the deadline instead of bursting.
pub struct FrameClock {
    period: Duration,
    next_deadline: Instant,
}

impl FrameClock {
    /// Clock at the game's fixed tick rate (30 Hz)
    pub fn new() -> Self {
        Self::with_rate(TICK_HZ)
    }

    pub fn with_rate(hz: u32) -> Self {
        let period = Duration::from_secs(1) / hz.max(1);
        Self {
            period,
            next_deadline: Instant::now() + period,
        }
    }

    /// Block until the next tick boundary
    pub fn wait(&mut self) {
        let now = Instant::now();
        match self.next_deadline.checked_duration_since(now) {
            Some(remaining) => {
                std::thread::sleep(remaining);
                self.next_deadline += self.period;
            }
            None => {
                // Running behind; reset the deadline instead of bursting
                self.next_deadline = now + self.period;
            }
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_paces_ticks() {
        let mut clock = FrameClock::with_rate(100);
        let start = Instant::now();
        for _ in 0..5 {
            clock.wait();
        }
        // 5 ticks at 100 Hz is at least 50 ms
        assert!(start.elapsed() >= Duration::from_millis(45));
    }
}
