//! Seeded randomness for puzzle generation.

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// The random source every generation step draws from.
///
/// Wrapping the PRNG behind a single indexed-draw entry point keeps
/// generation deterministic: a seed fixes the draw sequence, and the draw
/// sequence fixes the puzzle.
#[derive(Debug, Clone)]
pub(crate) struct PuzzleRng(Pcg64Mcg);

impl PuzzleRng {
    pub(crate) fn from_seed(seed: u64) -> Self {
        Self(Pcg64Mcg::seed_from_u64(seed))
    }

    /// Draws a uniform index in `0..bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub(crate) fn next_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}
