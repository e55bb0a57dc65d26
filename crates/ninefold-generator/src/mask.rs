//! Masking a solution down to a playable problem.

use ninefold_core::{Grid, Position};

use crate::rng::PuzzleRng;

/// Derives the problem grid from `solution` by flipping one fair coin per
/// cell in row-major order: an even draw keeps the cell hidden, an odd draw
/// reveals it.
///
/// Every cell consumes exactly one draw whatever the outcome, so the mask is
/// a pure function of the RNG state the fill walk left behind.
pub(crate) fn mask_solution(solution: &Grid, rng: &mut PuzzleRng) -> Grid {
    let mut problem = Grid::new();
    for pos in Position::ALL {
        if rng.next_index(2) == 0 {
            continue;
        }
        let digit = solution.get(pos);
        problem.set(pos, digit).expect("subset of a valid solution");
    }
    problem
}
