//! Platform abstraction layer
//!
//! The simulation never polls hardware itself. It consumes:
//! - Time: seconds elapsed since the previous frame
//! - Input: a per-frame [`FrameInput`] snapshot
//! - Randomness: uniform integers from a [`RandomSource`]
//!
//! Window/keyboard/renderer adapters implement these; the headless driver
//! and the tests use the simple implementations below.

use std::time::Instant;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::scene::FrameInput;

/// Frame timing source
pub trait Clock {
    /// Seconds elapsed since the previous call
    fn elapsed_since_last_frame(&mut self) -> f32;
}

/// Per-frame input source
pub trait InputSource {
    /// Input for the upcoming frame. Edge-triggered actions are true for
    /// exactly one poll per key press.
    fn poll(&mut self) -> FrameInput;
}

/// Uniform integer randomness used for spawn rolls and placement
pub trait RandomSource {
    /// Uniform integer in `min..=max`
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// Clock that advances by a constant step every frame
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl Clock for FixedClock {
    fn elapsed_since_last_frame(&mut self) -> f32 {
        self.step
    }
}

/// Wall-clock frame timer
#[derive(Debug)]
pub struct WallClock {
    last: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn elapsed_since_last_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pcg_uniform_int_inclusive_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..1_000 {
            let v = rng.uniform_int(0, 3);
            assert!((0..=3).contains(&v));
            saw_min |= v == 0;
            saw_max |= v == 3;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn test_pcg_uniform_int_degenerate_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(rng.uniform_int(5, 5), 5);
        assert_eq!(rng.uniform_int(9, 2), 9);
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::new(0.25);
        assert_eq!(clock.elapsed_since_last_frame(), 0.25);
        assert_eq!(clock.elapsed_since_last_frame(), 0.25);
    }

    #[test]
    fn test_wall_clock_measures_each_frame_separately() {
        let mut clock = WallClock::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let first = clock.elapsed_since_last_frame();
        let second = clock.elapsed_since_last_frame();
        assert!(first >= 0.005);
        assert!(second >= 0.0);
        assert!(second < first);
    }
}
