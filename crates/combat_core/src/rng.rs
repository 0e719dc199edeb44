//! Injectable randomness for intent decisions and enemy selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 42;

/// Source of the few random draws combat needs.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Seeded generator; the same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct CombatRng {
    seed: u64,
    rng: StdRng,
}

impl CombatRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for CombatRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for CombatRng {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
