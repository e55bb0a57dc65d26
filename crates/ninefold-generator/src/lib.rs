//! Seed-deterministic puzzle generation.
//!
//! Generation runs in two phases over one random stream:
//!
//! 1. **Fill** - a row-major backtracking walk places digits drawn at random
//!    until all 81 cells hold a valid complete solution.
//! 2. **Mask** - one fair coin per cell decides whether the solved digit is
//!    revealed in the problem grid or hidden for the player to find.
//!
//! Both phases draw from a single PRNG seeded by a `u64`, and the fill walk
//! consumes its draws before masking begins, so the whole puzzle is a pure
//! function of the seed. [`generate`] draws a fresh seed and reports it in
//! the result; replaying that seed through [`generate_with_seed`] rebuilds
//! the identical puzzle, which is what makes puzzles shareable by seed
//! alone.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::generate_with_seed;
//!
//! let first = generate_with_seed(42);
//! let second = generate_with_seed(42);
//! assert_eq!(first.solution, second.solution);
//! assert_eq!(first.problem, second.problem);
//! ```

mod fill;
mod mask;
mod rng;
mod worker;

use ninefold_core::Grid;

use self::rng::PuzzleRng;

/// A generated puzzle: the problem to play, the solution it came from, and
/// the seed that rebuilds both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed that deterministically reproduces this puzzle.
    pub seed: u64,
    /// The playable grid, a masked subset of `solution`.
    pub problem: Grid,
    /// The complete valid grid the problem was cut from.
    pub solution: Grid,
}

/// Generates a puzzle from a freshly drawn random seed.
///
/// The drawn seed is reported in the result, so the puzzle can be
/// regenerated later with [`generate_with_seed`].
#[must_use]
pub fn generate() -> GeneratedPuzzle {
    generate_with_seed(rand::random())
}

/// Generates the puzzle belonging to `seed`.
///
/// Equal seeds produce equal puzzles, on every run and every platform.
#[must_use]
pub fn generate_with_seed(seed: u64) -> GeneratedPuzzle {
    let mut rng = PuzzleRng::from_seed(seed);
    let solution = fill::fill_solution(&mut rng);
    let problem = mask::mask_solution(&solution, &mut rng);
    GeneratedPuzzle {
        seed,
        problem,
        solution,
    }
}
