//! Frame clock for wall-time timers

use std::time::Instant;

/// Tracks elapsed time between display refreshes.
///
/// Only timers (the background rotation) read the delta. Physics advances one
/// fixed step per tick regardless of how long the frame took.
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Number of frames ticked so far
    pub frame: u64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    /// Longest frame the clock will report, in seconds
    pub const MAX_DELTA: f64 = 0.25;

    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock from the wall clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.record(0.0);
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.record(elapsed);
    }

    /// Advance the clock by a fixed amount (headless runs)
    pub fn advance(&mut self, seconds: f64) {
        self.first_tick = false;
        self.record(seconds);
    }

    fn record(&mut self, seconds: f64) {
        // Clamp stalls (debugger, minimised window) and garbage input
        let seconds = if seconds.is_finite() { seconds } else { 0.0 };
        self.delta_time = seconds.clamp(0.0, Self::MAX_DELTA);
        self.total_time += self.delta_time;
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = FrameClock::new();
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame, 0);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame, 1);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut clock = FrameClock::new();
        clock.advance(0.5 / 60.0);
        clock.advance(0.5 / 60.0);
        assert!((clock.total_time - 1.0 / 60.0).abs() < 1e-10);
        assert_eq!(clock.frame, 2);
    }

    #[test]
    fn test_advance_clamps_long_and_bad_frames() {
        let mut clock = FrameClock::new();
        clock.advance(3.0);
        assert_eq!(clock.delta_time, FrameClock::MAX_DELTA);
        clock.advance(f64::NAN);
        assert_eq!(clock.delta_time, 0.0);
        clock.advance(-1.0);
        assert_eq!(clock.delta_time, 0.0);
        assert!((clock.total_time - FrameClock::MAX_DELTA).abs() < 1e-10);
    }
}
