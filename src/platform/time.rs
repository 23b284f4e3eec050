//! Fixed-timestep frame pacing
//!
//! Converts wall-clock time into a whole number of logical frames, carrying
//! the leftover forward.

use std::time::Duration;

/// Accumulator that hands out logical frames at a fixed rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    accumulator: Duration,
    /// Maximum frames per call to prevent spiral of death
    max_catch_up: u32,
}

impl FrameClock {
    pub fn new(frame_rate: u32, max_catch_up: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / frame_rate.max(1),
            accumulator: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    /// Length of one logical frame
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed time and return how many frames to run now
    ///
    /// Backlog beyond the catch-up cap is dropped.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut frames = 0;
        while self.accumulator >= self.step && frames < self.max_catch_up {
            self.accumulator -= self.step;
            frames += 1;
        }

        if frames == self.max_catch_up && self.accumulator >= self.step {
            log::debug!("Dropping {:?} of frame backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_frames() {
        let mut clock = FrameClock::new(50, 8);
        assert_eq!(clock.step(), Duration::from_millis(20));
        assert_eq!(clock.tick(Duration::from_millis(10)), 0);
        assert_eq!(clock.tick(Duration::from_millis(10)), 1);
        assert_eq!(clock.tick(Duration::from_millis(45)), 2);
        // 5ms carried over
        assert_eq!(clock.tick(Duration::from_millis(15)), 1);
    }

    #[test]
    fn test_catch_up_cap() {
        let mut clock = FrameClock::new(50, 3);
        assert_eq!(clock.tick(Duration::from_secs(1)), 3);
        // Backlog dropped
        assert_eq!(clock.tick(Duration::from_millis(5)), 0);
    }
}
