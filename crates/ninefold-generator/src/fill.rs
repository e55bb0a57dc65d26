//! The backtracking walk that fills a complete solution.

use ninefold_core::{Grid, Position};

use crate::{rng::PuzzleRng, worker::CellWorker};

/// Fills all 81 cells with a valid solution, visiting them in row-major
/// order.
///
/// Each cell is driven by a [`CellWorker`] staging random untried digits.
/// A staged digit that conflicts is retired and the next one tried; a worker
/// that runs dry marks a dead end, which clears the cell, discards its
/// worker, and moves the cursor back exactly one cell so the previous worker
/// advances past the digit that led here. The walk keeps no trail beyond the
/// flat worker array and the cursor itself.
pub(crate) fn fill_solution(rng: &mut PuzzleRng) -> Grid {
    let mut solution = Grid::new();
    let mut workers: [Option<CellWorker>; 81] = [const { None }; 81];
    let mut cursor = 0;
    let mut steps = 0u64;
    while cursor < 81 {
        steps += 1;
        let pos = Position::ALL[cursor];
        let worker = match &mut workers[cursor] {
            Some(worker) => {
                // Revisited after a dead end ahead; retire the digit that
                // was committed here and stage the next one
                worker.advance(rng);
                worker
            }
            slot @ None => slot.insert(CellWorker::new(rng)),
        };
        if place_staged_digit(&mut solution, worker, pos, rng) {
            cursor += 1;
        } else {
            solution.clear(pos);
            workers[cursor] = None;
            cursor = cursor.saturating_sub(1);
        }
    }
    log::debug!("solution filled after {steps} cursor steps");
    solution
}

/// Tries the worker's staged digits at `pos` until one commits, advancing
/// past rejections. Returns whether a digit was placed.
fn place_staged_digit(
    solution: &mut Grid,
    worker: &mut CellWorker,
    pos: Position,
    rng: &mut PuzzleRng,
) -> bool {
    while let Some(digit) = worker.current() {
        match solution.set(pos, Some(digit)) {
            Ok(()) => return true,
            Err(_) => worker.advance(rng),
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use ninefold_core::{DigitSet, House};

    use super::*;

    #[test]
    fn test_fill_produces_a_complete_valid_grid() {
        let mut rng = PuzzleRng::from_seed(42);
        let solution = fill_solution(&mut rng);
        assert!(solution.is_complete());
        for house in House::ALL {
            let digits: DigitSet = house
                .positions()
                .filter_map(|pos| solution.get(pos))
                .collect();
            assert_eq!(digits, DigitSet::FULL, "{house} is not a permutation");
        }
    }

    #[test]
    fn test_fill_is_seed_deterministic() {
        let mut first = PuzzleRng::from_seed(42);
        let mut second = PuzzleRng::from_seed(42);
        assert_eq!(fill_solution(&mut first), fill_solution(&mut second));
    }

    #[test]
    fn test_fill_diverges_across_seeds() {
        let mut a = PuzzleRng::from_seed(1);
        let mut b = PuzzleRng::from_seed(2);
        assert_ne!(fill_solution(&mut a), fill_solution(&mut b));
    }
}
