//! Seeded latency sampler.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::ports::{LatencyPort, MAX_LATENCY_MS, MIN_LATENCY_MS};

/// Uniform latency source over `[MIN_LATENCY_MS, MAX_LATENCY_MS)`.
#[derive(Debug, Clone)]
pub struct SeededLatency {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl SeededLatency {
    /// Reproducible sequence for a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeds from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Uses `seed` when given, entropy otherwise.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl LatencyPort for SeededLatency {
    fn sample_ms(&mut self) -> u32 {
        self.rng.gen_range(MIN_LATENCY_MS..MAX_LATENCY_MS)
    }
}
