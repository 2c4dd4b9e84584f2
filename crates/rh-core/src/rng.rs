//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! All randomness in a run (currently: driver ride-capacity draws at load
//! time) flows from one `SimRng` seeded by the run's master seed.  The same
//! seed always produces the same capacities and therefore the same dispatch
//! trajectory.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for global operations.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
