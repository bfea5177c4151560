//! Deterministic RNG wrapper used to draw edge indices.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Deterministic RNG handle exposed to XSwap consumers.
///
/// The handle is a thin wrapper around `StdRng` that documents the seeding
/// policy used throughout the project. A `seed: u64` must be provided by the
/// caller and the generator is only restartable by constructing a new handle
/// from the same seed. Callers that need many independent permutations use
/// consecutive seeds (`seed`, `seed + 1`, ...), see [`permutation_seed`].
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniformly distributed index in `[0, upper)`.
    ///
    /// `upper` must be non-zero.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Seed used for the `index`-th permutation of a batch starting at `initial_seed`.
pub fn permutation_seed(initial_seed: u64, index: usize) -> u64 {
    initial_seed.wrapping_add(index as u64)
}
