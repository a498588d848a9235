//! Fixed-rate frame scheduler
//!
//! The loop runs at a fixed tick rate; the only blocking point in a frame is
//! the end-of-frame wait. A late frame re-anchors the deadline to the
//! current wall clock instead of queueing catch-up ticks, so a stall never
//! turns into a burst of backlogged simulation.

use std::time::{Duration, Instant};

use crate::consts::TICK_RATE;

#[derive(Debug)]
pub struct FrameClock {
    frame_duration: Duration,
    next_deadline: Instant,
}

impl FrameClock {
    /// Clock at the standard tick rate
    pub fn new() -> Self {
        Self::with_rate(TICK_RATE)
    }

    pub fn with_rate(ticks_per_second: u32) -> Self {
        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(ticks_per_second));
        Self {
            frame_duration,
            next_deadline: Instant::now() + frame_duration,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Sleep until the next frame boundary. Returns the wait that was
    /// actually performed; zero means the frame overran its budget.
    pub fn wait_for_next_frame(&mut self) -> Duration {
        let now = Instant::now();
        if now >= self.next_deadline {
            // Overran: drop to the current wall-clock boundary, no backlog
            self.next_deadline = now + self.frame_duration;
            return Duration::ZERO;
        }
        let wait = self.next_deadline - now;
        std::thread::sleep(wait);
        self.next_deadline += self.frame_duration;
        wait
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
    fn test_frame_duration_from_rate() {
        let clock = FrameClock::with_rate(60);
        let d = clock.frame_duration();
        assert!(d > Duration::from_millis(16));
        assert!(d < Duration::from_millis(17));
    }

    #[test]
    fn test_wait_advances_one_frame() {
        let mut clock = FrameClock::with_rate(250); // short frames keep the test quick
        let start = Instant::now();
        clock.wait_for_next_frame();
        clock.wait_for_next_frame();
        // Two 4ms frames; generous upper bound for slow CI
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(4));
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_overrun_reanchors_without_backlog() {
        let mut clock = FrameClock::with_rate(1000);
        std::thread::sleep(Duration::from_millis(20)); // miss many boundaries
        let waited = clock.wait_for_next_frame();
        assert_eq!(waited, Duration::ZERO);
        // The next wait is a normal single frame, not a burst of zero-waits
        let waited = clock.wait_for_next_frame();
        assert!(waited > Duration::ZERO);
    }
}
