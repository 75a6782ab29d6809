//! Seeded random source
//!
//! The only randomness in the simulation. Held by the session and threaded
//! through spawning and firing decisions so runs replay exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Session RNG (PCG32 seeded from a u64)
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.inner.random::<f32>()
    }

    /// True with probability `p` (p <= 0 never fires)
    pub fn chance(&mut self, p: f32) -> bool {
        // Always draw so the stream position doesn't depend on p
        self.unit() < p
    }

    /// Uniform integer in [min, max]
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.inner.random_range(min..=max)
    }

    /// Uniform index in [0, len)
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }

    /// Uniform float in [-spread, spread]
    pub fn jitter(&mut self, spread: f32) -> f32 {
        (self.unit() * 2.0 - 1.0) * spread
    }
}
