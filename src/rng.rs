//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides the uniform draws the memetic
//! operators need: index sampling over small integer ranges, a fair coin for
//! gene signs, and the discrete acceptance draw over `{0.01, 0.02, ..., 1.00}`
//! used by the crossover and mutation probability checks.
//!
//! ## Example
//!
//! ```rust
//! use memrev::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::new();
//! let position = rng.index(10);
//! assert!(position < 10);
//!
//! let acceptance = rng.percentage();
//! assert!((0.01..=1.0).contains(&acceptance));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the sampling
/// methods used by the evolutionary operators.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system
    /// entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero; callers guard against empty ranges.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Draws a uniform value from the discrete set `{0.01, 0.02, ..., 1.00}`.
    ///
    /// This is the acceptance draw compared against the crossover and
    /// mutation probabilities: an operator fires iff the drawn value is less
    /// than or equal to its configured probability.
    pub fn percentage(&mut self) -> f64 {
        (self.rng.gen_range(0..100u32) + 1) as f64 / 100.0
    }

    /// Flips a fair coin. Used to pick the sign of each gene when a
    /// candidate is generated or regenerated.
    pub fn coin(&mut self) -> bool {
        self.rng.gen_range(0..2u32) == 1
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
