//! Seedable random source shared by terrain generation and tie-breaks.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Session random number generator.
///
/// A seed of 0 draws fresh OS entropy; any other seed replays the same
/// map and the same tie-breaks.
#[derive(Clone, Debug)]
pub struct SessionRng {
    rng: SmallRng,
    seed: u64,
}

impl SessionRng {
    /// Create a new generator.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng, seed }
    }

    /// Seed this generator was created with (0 = entropy).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// True when runs are reproducible.
    pub fn is_deterministic(&self) -> bool {
        self.seed != 0
    }
}

impl RngCore for SessionRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
