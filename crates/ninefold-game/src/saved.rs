//! Saving a session and rebuilding the board from a save.

use std::time::Duration;

use ninefold_core::{Digit, DigitSet, Position};
use serde::{Deserialize, Serialize};

use crate::{PuzzleBoard, PuzzleCell};

/// One cell of a saved session.
///
/// Cells are addressed explicitly by row and column so a save remains a
/// plain flat list, readable without knowing the board's storage order.
/// Notes are listed ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCell {
    /// Row of the cell, 0-8.
    pub row: u8,
    /// Column of the cell, 0-8.
    pub col: u8,
    /// The digit in the cell, 1-9, or `None` if empty.
    pub value: Option<u8>,
    /// Pencilled notes, each 1-9, in ascending order.
    pub notes: Vec<u8>,
    /// Whether the cell belongs to the player rather than to the deal.
    pub editable: bool,
}

/// A complete saved session: the seed the puzzle came from, the time played
/// so far, and every cell's state.
///
/// The cell list alone rebuilds the board, so restoring never re-runs the
/// generator; the seed is kept for sharing and for dealing the same puzzle
/// fresh.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use ninefold_core::Position;
/// use ninefold_game::{PuzzleBoard, SavedGame};
/// use ninefold_generator::generate_with_seed;
///
/// let puzzle = generate_with_seed(42);
/// let mut board = PuzzleBoard::new(&puzzle);
///
/// let save = SavedGame::capture(&board, puzzle.seed, Duration::from_secs(90));
/// let restored = save.restore().unwrap();
/// assert_eq!(restored, board);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Seed that deals this puzzle.
    pub seed: u64,
    /// Time played before the save.
    pub elapsed: Duration,
    /// All 81 cells, row-major.
    pub cells: Vec<SavedCell>,
}

/// The reasons a save cannot be restored into a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RestoreError {
    /// The save does not hold one entry per board cell.
    #[display("expected 81 saved cells, found {count}")]
    WrongCellCount {
        /// Number of entries in the save.
        count: usize,
    },
    /// A saved cell names a position off the board.
    #[display("saved cell position ({row}, {col}) is out of bounds")]
    PositionOutOfBounds {
        /// Saved row.
        row: u8,
        /// Saved column.
        col: u8,
    },
    /// Two saved cells name the same position.
    #[display("saved cells address position ({row}, {col}) twice")]
    DuplicatePosition {
        /// Duplicated row.
        row: u8,
        /// Duplicated column.
        col: u8,
    },
    /// A saved value is outside 1-9.
    #[display("saved cell value must be between 1 and 9, got {value}")]
    InvalidValue {
        /// The out-of-range value.
        value: u8,
    },
    /// A saved note is outside 1-9.
    #[display("saved note must be between 1 and 9, got {value}")]
    InvalidNote {
        /// The out-of-range note.
        value: u8,
    },
}

impl SavedGame {
    /// Captures the board as a flat, row-major cell list together with the
    /// seed and elapsed play time.
    #[must_use]
    pub fn capture(board: &PuzzleBoard, seed: u64, elapsed: Duration) -> Self {
        let cells = Position::ALL
            .iter()
            .map(|&pos| {
                let cell = board.cell(pos);
                SavedCell {
                    row: pos.row(),
                    col: pos.col(),
                    value: cell.value().map(u8::from),
                    notes: cell.notes().into_iter().map(u8::from).collect(),
                    editable: cell.is_editable(),
                }
            })
            .collect();
        Self {
            seed,
            elapsed,
            cells,
        }
    }

    /// Rebuilds the board this save was captured from.
    ///
    /// Only the save's shape is checked: one entry per cell, positions on
    /// the board and named once, values and notes in digit range. Cell
    /// entries may appear in any order. The values themselves are restored
    /// as saved, without replaying the placement rules; a save whose values
    /// conflict restores fine and simply reports `is_solved` as false.
    ///
    /// # Errors
    ///
    /// Returns the first [`RestoreError`] the shape checks hit.
    pub fn restore(&self) -> Result<PuzzleBoard, RestoreError> {
        if self.cells.len() != 81 {
            return Err(RestoreError::WrongCellCount {
                count: self.cells.len(),
            });
        }
        let mut board = PuzzleBoard::empty();
        let mut seen = [false; 81];
        for cell in &self.cells {
            if cell.row >= 9 || cell.col >= 9 {
                return Err(RestoreError::PositionOutOfBounds {
                    row: cell.row,
                    col: cell.col,
                });
            }
            let pos = Position::new(cell.row, cell.col);
            if seen[pos.index()] {
                return Err(RestoreError::DuplicatePosition {
                    row: cell.row,
                    col: cell.col,
                });
            }
            seen[pos.index()] = true;

            let value = match cell.value {
                Some(raw) => {
                    Some(Digit::new(raw).ok_or(RestoreError::InvalidValue { value: raw })?)
                }
                None => None,
            };
            let mut notes = DigitSet::EMPTY;
            for &raw in &cell.notes {
                notes.insert(Digit::new(raw).ok_or(RestoreError::InvalidNote { value: raw })?);
            }
            board.restore_cell(pos, PuzzleCell::from_parts(value, notes, cell.editable));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use ninefold_generator::generate_with_seed;

    use super::*;

    fn saved_cell(row: u8, col: u8, value: Option<u8>) -> SavedCell {
        SavedCell {
            row,
            col,
            value,
            notes: Vec::new(),
            editable: value.is_none(),
        }
    }

    fn empty_save() -> SavedGame {
        let cells = Position::ALL
            .iter()
            .map(|pos| saved_cell(pos.row(), pos.col(), None))
            .collect();
        SavedGame {
            seed: 0,
            elapsed: Duration::ZERO,
            cells,
        }
    }

    #[test]
    fn test_capture_restore_round_trip_preserves_play() {
        let puzzle = generate_with_seed(42);
        let mut board = PuzzleBoard::new(&puzzle);

        let open = *Position::ALL
            .iter()
            .find(|&&pos| board.cell(pos).value().is_none())
            .expect("puzzle has empty cells");
        let digit = board
            .candidates(open)
            .into_iter()
            .next()
            .expect("open cell has a candidate");
        board.set_value(open, Some(digit.value())).unwrap();
        board.toggle_note(open, Digit::D9);
        board.toggle_note(open, Digit::D1);

        let save = SavedGame::capture(&board, puzzle.seed, Duration::from_secs(125));
        assert_eq!(save.seed, puzzle.seed);
        assert_eq!(save.elapsed, Duration::from_secs(125));
        assert_eq!(save.cells.len(), 81);

        let restored = save.restore().expect("captured save restores");
        assert_eq!(restored, board);
    }

    #[test]
    fn test_save_serializes_through_json() {
        let puzzle = generate_with_seed(7);
        let mut board = PuzzleBoard::new(&puzzle);
        let open = *Position::ALL
            .iter()
            .find(|&&pos| board.cell(pos).value().is_none())
            .expect("puzzle has empty cells");
        board.toggle_note(open, Digit::D4);

        let save = SavedGame::capture(&board, puzzle.seed, Duration::from_secs(30));
        let json = serde_json::to_string(&save).expect("save serializes");
        let parsed: SavedGame = serde_json::from_str(&json).expect("save parses back");
        assert_eq!(parsed, save);
        assert_eq!(parsed.restore().unwrap(), board);
    }

    #[test]
    fn test_captured_notes_are_ascending() {
        let mut board = PuzzleBoard::empty();
        let pos = Position::new(3, 3);
        board.toggle_note(pos, Digit::D8);
        board.toggle_note(pos, Digit::D2);
        board.toggle_note(pos, Digit::D5);

        let save = SavedGame::capture(&board, 0, Duration::ZERO);
        let entry = &save.cells[pos.index()];
        assert_eq!(entry.notes, [2, 5, 8]);
    }

    #[test]
    fn test_restore_accepts_any_cell_order() {
        let puzzle = generate_with_seed(42);
        let board = PuzzleBoard::new(&puzzle);
        let mut save = SavedGame::capture(&board, puzzle.seed, Duration::ZERO);
        save.cells.reverse();
        assert_eq!(save.restore().unwrap(), board);
    }

    #[test]
    fn test_restore_rejects_malformed_shapes() {
        let mut save = empty_save();
        save.cells.truncate(80);
        assert_eq!(
            save.restore().unwrap_err(),
            RestoreError::WrongCellCount { count: 80 }
        );

        let mut save = empty_save();
        save.cells[5].row = 9;
        assert_eq!(
            save.restore().unwrap_err(),
            RestoreError::PositionOutOfBounds { row: 9, col: 5 }
        );

        let mut save = empty_save();
        save.cells[1].row = 0;
        save.cells[1].col = 0;
        assert_eq!(
            save.restore().unwrap_err(),
            RestoreError::DuplicatePosition { row: 0, col: 0 }
        );

        let mut save = empty_save();
        save.cells[3].value = Some(12);
        assert_eq!(
            save.restore().unwrap_err(),
            RestoreError::InvalidValue { value: 12 }
        );

        let mut save = empty_save();
        save.cells[3].notes.push(0);
        assert_eq!(
            save.restore().unwrap_err(),
            RestoreError::InvalidNote { value: 0 }
        );
    }

    #[test]
    fn test_restore_keeps_conflicting_values_and_solved_check_fails() {
        // A complete arrangement, then one cell duplicated within its row
        let mut save = empty_save();
        for cell in &mut save.cells {
            let value = (cell.row * 3 + cell.row / 3 + cell.col) % 9 + 1;
            cell.value = Some(value);
            cell.editable = false;
        }
        let duplicate = save.cells[0].value;
        save.cells[1].value = duplicate;

        let board = save.restore().expect("shape checks pass");
        assert!(board.is_complete());
        assert!(!board.is_solved());
    }
}
