//! Seeded synthetic instance generation.
//!
//! Produces job pools and capacity profiles for a fixed window. Generation is
//! fully determined by the seed, so several strategies can be benchmarked
//! against identical pools.
//!
//! Every generated job is admissible for the window it was generated for:
//! `start <= release`, `release + length <= deadline <= end`, and
//! `1 <= length <= max_length`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CapacityProfile, Job};

/// Random job-pool generator for a time window.
///
/// # Example
/// ```
/// use u_aac::generator::JobPoolGenerator;
///
/// let generator = JobPoolGenerator::new(0, 48).with_seed(7).with_max_length(8);
/// let pool = generator.generate(100);
/// assert_eq!(pool.len(), 100);
/// assert_eq!(pool, generator.generate(100));
/// ```
#[derive(Debug, Clone)]
pub struct JobPoolGenerator {
    start_time: i64,
    end_time: i64,
    seed: u64,
    max_length: i64,
    max_height: f64,
}

impl JobPoolGenerator {
    /// Creates a generator for `[start_time, end_time)`.
    ///
    /// Defaults: seed 0, `max_length` = window length, `max_height` = 1.0.
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
            seed: 0,
            max_length: end_time.saturating_sub(start_time),
            max_height: 1.0,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Caps generated job lengths.
    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = max_length;
        self
    }

    /// Caps generated job heights.
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height.max(0.0);
        self
    }

    fn window(&self) -> i64 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Generates `count` jobs.
    ///
    /// Returns an empty pool when the window or `max_length` is not positive.
    pub fn generate(&self, count: usize) -> Vec<Job> {
        let max_len = self.max_length.min(self.window());
        if max_len <= 0 {
            return Vec::new();
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..count)
            .map(|_| {
                let length = rng.random_range(1..=max_len);
                let release = rng.random_range(self.start_time..=self.end_time - length);
                let deadline = rng.random_range(release + length..=self.end_time);
                let height = rng.random_range(0.0..=self.max_height);
                Job::new(release, deadline, length, height)
            })
            .collect()
    }

    /// Flat capacity over the window.
    pub fn capacity_profile(&self, capacity: f64) -> CapacityProfile {
        CapacityProfile::constant(self.window().max(0) as usize, capacity)
    }

    /// Capacity drawn uniformly from `[low, high]` per step.
    ///
    /// Seeded independently of [`generate`](Self::generate), so the pool
    /// does not change when the profile is regenerated.
    pub fn random_capacity_profile(&self, low: f64, high: f64) -> CapacityProfile {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(1));
        let len = self.window().max(0) as usize;
        CapacityProfile::new((0..len).map(|_| rng.random_range(low..=high)).collect())
    }
}
