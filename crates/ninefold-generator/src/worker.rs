//! Per-cell candidate draws used by the fill walk.

use ninefold_core::{Digit, DigitSet};

use crate::rng::PuzzleRng;

/// Tracks the digits one cell has not yet tried, plus the digit currently
/// staged for placement.
///
/// A fresh worker holds all nine digits and immediately stages a random one.
/// Each [`advance`](CellWorker::advance) retires the staged digit from the
/// pool and stages another random draw; once the pool is empty the staged
/// slot stays vacant, which is the worker's dead-end signal.
#[derive(Debug, Clone)]
pub(crate) struct CellWorker {
    remaining: DigitSet,
    current: Option<Digit>,
}

impl CellWorker {
    pub(crate) fn new(rng: &mut PuzzleRng) -> Self {
        let mut worker = Self {
            remaining: DigitSet::FULL,
            current: None,
        };
        worker.advance(rng);
        worker
    }

    /// The digit staged for placement, or `None` once every digit has been
    /// tried.
    pub(crate) fn current(&self) -> Option<Digit> {
        self.current
    }

    /// Retires the staged digit and stages a random draw from the untried
    /// pool.
    ///
    /// A staged digit leaves the pool only here, so no digit is staged twice
    /// by the same worker.
    pub(crate) fn advance(&mut self, rng: &mut PuzzleRng) {
        if let Some(digit) = self.current.take() {
            self.remaining.remove(digit);
        }
        if !self.remaining.is_empty() {
            let index = rng.next_index(self.remaining.len());
            self.current = self.remaining.select(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_worker_stages_a_digit() {
        let mut rng = PuzzleRng::from_seed(0);
        let worker = CellWorker::new(&mut rng);
        assert!(worker.current().is_some());
    }

    #[test]
    fn test_worker_stages_each_digit_once_then_runs_dry() {
        let mut rng = PuzzleRng::from_seed(11);
        let mut worker = CellWorker::new(&mut rng);
        let mut seen = DigitSet::EMPTY;
        while let Some(digit) = worker.current() {
            assert!(!seen.contains(digit));
            seen.insert(digit);
            worker.advance(&mut rng);
        }
        assert_eq!(seen, DigitSet::FULL);

        // Advancing a dry worker stays a no-op
        worker.advance(&mut rng);
        assert_eq!(worker.current(), None);
    }

    #[test]
    fn test_staged_digit_is_retired_only_on_advance() {
        let mut rng = PuzzleRng::from_seed(3);
        let mut worker = CellWorker::new(&mut rng);
        let first = worker.current().unwrap();
        assert!(worker.remaining.contains(first));
        worker.advance(&mut rng);
        assert!(!worker.remaining.contains(first));
    }

    #[test]
    fn test_worker_draws_are_seed_deterministic() {
        let sequence = |seed| {
            let mut rng = PuzzleRng::from_seed(seed);
            let mut worker = CellWorker::new(&mut rng);
            let mut digits = Vec::new();
            while let Some(digit) = worker.current() {
                digits.push(digit);
                worker.advance(&mut rng);
            }
            digits
        };
        assert_eq!(sequence(99), sequence(99));
    }
}
