//! Random question selection without replacement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws question numbers from a shrinking pool.
///
/// Every number in the configured range is handed out at most once.
pub struct QuestionSelector<R = StdRng> {
    pool: Vec<u32>,
    rng: R,
}

impl QuestionSelector<StdRng> {
    /// Create a selector over `min..=max` seeded from system entropy.
    pub fn new(min: u32, max: u32) -> Self {
        Self::with_rng(min, max, StdRng::from_entropy())
    }
}

impl<R: Rng> QuestionSelector<R> {
    /// Create a selector over `min..=max` using the given random source.
    ///
    /// An empty range (`min > max`) produces an empty pool.
    pub fn with_rng(min: u32, max: u32, rng: R) -> Self {
        Self {
            pool: (min..=max).collect(),
            rng,
        }
    }

    pub fn has_next(&self) -> bool {
        !self.pool.is_empty()
    }

    /// Number of questions still available.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Remove and return a uniformly random number from the pool.
    ///
    /// Returns `None` once the pool is exhausted.
    pub fn draw_next(&mut self) -> Option<u32> {
        if self.pool.is_empty() {
            return None;
        }

        let index = self.rng.gen_range(0..self.pool.len());
        // Pool order carries no meaning, so swap_remove keeps draws uniform.
        Some(self.pool.swap_remove(index))
    }
}
