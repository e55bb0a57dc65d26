//! The playable board a puzzle is dealt onto.

use ninefold_core::{CellError, CellGrid, Digit, DigitSet, Grid, Position, rules};
use ninefold_generator::GeneratedPuzzle;

use crate::PuzzleCell;

/// An 81-cell playing surface projected from a generated puzzle.
///
/// Dealing copies the problem grid onto the board: revealed cells arrive
/// with their digit and are marked non-editable, hidden cells arrive empty
/// and editable. From then on the board stands alone; play, persistence, and
/// the solved check never consult the generator again.
///
/// Player writes go through [`PuzzleBoard::set_value`], which applies the
/// same range and uniqueness checks as the engine grid, against the board's
/// current values.
///
/// # Example
///
/// ```
/// use ninefold_core::Position;
/// use ninefold_game::PuzzleBoard;
/// use ninefold_generator::generate_with_seed;
///
/// let puzzle = generate_with_seed(42);
/// let board = PuzzleBoard::new(&puzzle);
///
/// // Hidden cells are what the player has left to do
/// let hidden = Position::ALL
///     .iter()
///     .filter(|&&pos| puzzle.problem.get(pos).is_none())
///     .count();
/// assert_eq!(board.empty_cell_count(), hidden);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleBoard {
    cells: [PuzzleCell; 81],
}

impl PuzzleBoard {
    /// Creates a board with every cell empty and editable.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [const { PuzzleCell::empty() }; 81],
        }
    }

    /// Deals `puzzle` onto a fresh board.
    ///
    /// Cells revealed by the problem grid become givens, locked against
    /// editing; the rest stay empty for the player.
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle) -> Self {
        let mut board = Self::empty();
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem.get(pos) {
                board.cells[pos.index()] = PuzzleCell::given(digit);
            }
        }
        board
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> PuzzleCell {
        self.cells[pos.index()]
    }

    /// Writes a player value at `pos`: range check first, then row, column,
    /// and box uniqueness against the board's current values. `None` clears
    /// the cell unconditionally.
    ///
    /// The cell's editable flag is not consulted; interfaces that lock given
    /// cells enforce that before calling.
    ///
    /// # Errors
    ///
    /// [`CellError::OutOfRange`] if `value` is outside 1-9, or
    /// [`CellError::Conflict`] if the digit already appears in one of the
    /// cell's houses. The board is unchanged on error.
    pub fn set_value(&mut self, pos: Position, value: Option<u8>) -> Result<(), CellError> {
        let digit = match value {
            Some(raw) => Some(Digit::new(raw).ok_or(CellError::OutOfRange { value: raw })?),
            None => None,
        };
        if let Some(digit) = digit {
            rules::check_placement(self, pos, digit)?;
        }
        self.cells[pos.index()].write_value(digit);
        Ok(())
    }

    /// Toggles a pencilled note at `pos` and returns whether the note is
    /// present afterwards.
    ///
    /// Notes are free-form player annotations; they are not validated
    /// against the placement rules.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> bool {
        self.cells[pos.index()].toggle_note(digit)
    }

    /// The digits [`PuzzleBoard::set_value`] would currently accept at
    /// `pos`.
    ///
    /// A digit is a candidate when it appears nowhere in the cell's row,
    /// column, or box. A filled cell's own digit is not a candidate, the
    /// same way re-placing it is rejected.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        Digit::ALL
            .into_iter()
            .filter(|&digit| rules::check_placement(self, pos, digit).is_ok())
            .collect()
    }

    /// Counts the cells that currently hold no value.
    #[must_use]
    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value().is_none()).count()
    }

    /// Returns whether every cell holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        rules::is_complete(self)
    }

    /// Returns whether the board holds a complete valid solution.
    ///
    /// Every cell value is replayed through a fresh validated grid; the
    /// first empty cell or rejected placement ends the check. Any valid
    /// solution passes, not just the one the puzzle was cut from.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let mut replay = Grid::new();
        for pos in Position::ALL {
            let Some(digit) = self.digit_at(pos) else {
                return false;
            };
            if replay.set(pos, Some(digit)).is_err() {
                return false;
            }
        }
        true
    }

    pub(crate) fn restore_cell(&mut self, pos: Position, cell: PuzzleCell) {
        self.cells[pos.index()] = cell;
    }
}

impl Default for PuzzleBoard {
    fn default() -> Self {
        Self::empty()
    }
}

impl CellGrid for PuzzleBoard {
    fn digit_at(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).value()
    }
}
