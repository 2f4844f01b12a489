use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Deterministic stream of palette indices.
///
/// The same seed always yields the same sequence, which is what lets a
/// pattern be reproduced from its seed alone. ChaCha12 is a named algorithm
/// with a fixed output, and each index is derived from one `u32` by a
/// widening multiply, so the sequence does not move with `rand` releases.
#[derive(Debug, Clone)]
pub struct SeededColorStream {
    seed: u64,
    palette_size: usize,
    rng: ChaCha12Rng,
}

impl SeededColorStream {
    pub fn new(seed: u64, palette_size: usize) -> Self {
        Self {
            seed,
            palette_size,
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// Starts over from the beginning of the sequence for `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    pub fn restart(&mut self) {
        self.reseed(self.seed);
    }

    /// Indices for the three faces of one cube.
    pub fn next_triple(&mut self) -> Option<[usize; 3]> {
        Some([self.next()?, self.next()?, self.next()?])
    }
}

impl Iterator for SeededColorStream {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.palette_size == 0 {
            return None;
        }
        let scaled = u64::from(self.rng.next_u32()) * self.palette_size as u64;
        Some((scaled >> 32) as usize)
    }
}
