//! Placement rules: row, column, and box uniqueness checks.
//!
//! The checks here are pure reads. They answer "would this digit duplicate
//! an existing one?" for a single house or for all three houses of a cell;
//! committing a value after a clean check is the writer's job
//! ([`Grid::set`](crate::Grid::set) and friends). Empty values are not
//! checked at all; clearing a cell can never conflict.

use crate::{Conflict, Digit, House, Position};

/// Read access to a 9×9 arrangement of optional digits.
///
/// The placement rules run against anything cell-shaped through this trait,
/// so a raw [`Grid`](crate::Grid) and a player-facing board share one
/// validator. Reads are never validated; only writes are.
pub trait CellGrid {
    /// Returns the digit at `pos`, or `None` for an empty cell.
    fn digit_at(&self, pos: Position) -> Option<Digit>;
}

fn check_house<C: CellGrid>(cells: &C, house: House, digit: Digit) -> Result<(), Conflict> {
    for pos in house.positions() {
        if cells.digit_at(pos) == Some(digit) {
            return Err(Conflict { digit, house });
        }
    }
    Ok(())
}

/// Checks that `digit` does not already appear anywhere in `row`.
///
/// The entire row is scanned, including the target cell itself, so
/// re-placing the digit a cell already holds also reports a conflict.
///
/// # Errors
///
/// Returns a [`Conflict`] naming the row if the digit is already present.
///
/// # Panics
///
/// Panics if `row` is 9 or greater.
pub fn check_row<C: CellGrid>(cells: &C, row: u8, digit: Digit) -> Result<(), Conflict> {
    check_house(cells, House::Row { row }, digit)
}

/// Checks that `digit` does not already appear anywhere in `col`.
///
/// # Errors
///
/// Returns a [`Conflict`] naming the column if the digit is already present.
///
/// # Panics
///
/// Panics if `col` is 9 or greater.
pub fn check_column<C: CellGrid>(cells: &C, col: u8, digit: Digit) -> Result<(), Conflict> {
    check_house(cells, House::Column { col }, digit)
}

/// Checks that `digit` does not already appear in the 3×3 box containing
/// `(row, col)`.
///
/// # Errors
///
/// Returns a [`Conflict`] naming the box if the digit is already present.
///
/// # Panics
///
/// Panics if `row` or `col` is 9 or greater.
pub fn check_box<C: CellGrid>(cells: &C, row: u8, col: u8, digit: Digit) -> Result<(), Conflict> {
    check_house(cells, House::box_containing(row, col), digit)
}

/// Runs the row, column, and box checks for placing `digit` at `pos`, in
/// that order, reporting the first conflict found.
///
/// # Errors
///
/// Returns the first [`Conflict`] among row, column, and box.
pub fn check_placement<C: CellGrid>(cells: &C, pos: Position, digit: Digit) -> Result<(), Conflict> {
    check_row(cells, pos.row(), digit)?;
    check_column(cells, pos.col(), digit)?;
    check_box(cells, pos.row(), pos.col(), digit)
}

/// Returns whether every cell holds a value.
#[must_use]
pub fn is_complete<C: CellGrid>(cells: &C) -> bool {
    Position::ALL.iter().all(|pos| cells.digit_at(*pos).is_some())
}

#[cfg(test)]
mod tests {
    use crate::Grid;

    use super::*;

    #[test]
    fn test_empty_grid_never_conflicts() {
        let grid = Grid::new();
        for digit in Digit::ALL {
            assert_eq!(check_row(&grid, 0, digit), Ok(()));
            assert_eq!(check_column(&grid, 8, digit), Ok(()));
            assert_eq!(check_box(&grid, 4, 4, digit), Ok(()));
        }
    }

    #[test]
    fn test_row_conflict_is_seen_from_every_column() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1)).unwrap();

        let err = check_row(&grid, 0, Digit::D1).unwrap_err();
        assert_eq!(
            err,
            Conflict {
                digit: Digit::D1,
                house: House::Row { row: 0 },
            }
        );
        // Other rows and other digits stay clean
        assert_eq!(check_row(&grid, 1, Digit::D1), Ok(()));
        assert_eq!(check_row(&grid, 0, Digit::D2), Ok(()));
    }

    #[test]
    fn test_column_conflict() {
        let mut grid = Grid::new();
        grid.set(Position::new(3, 6), Some(Digit::D8)).unwrap();

        let err = check_column(&grid, 6, Digit::D8).unwrap_err();
        assert_eq!(err.house, House::Column { col: 6 });
        assert_eq!(check_column(&grid, 5, Digit::D8), Ok(()));
    }

    #[test]
    fn test_box_conflict_across_rows_and_columns() {
        let mut grid = Grid::new();
        grid.set(Position::new(4, 4), Some(Digit::D5)).unwrap();

        // (3, 5) shares the center box with (4, 4)
        let err = check_box(&grid, 3, 5, Digit::D5).unwrap_err();
        assert_eq!(err.house, House::Box { index: 4 });
        // (3, 6) lies in the next box over
        assert_eq!(check_box(&grid, 3, 6, Digit::D5), Ok(()));
    }

    #[test]
    fn test_placement_reports_row_first() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D9)).unwrap();

        // (0, 1) conflicts in both the row and the box; row wins
        let err = check_placement(&grid, Position::new(0, 1), Digit::D9).unwrap_err();
        assert_eq!(err.house, House::Row { row: 0 });
    }

    #[test]
    fn test_is_complete() {
        let mut grid = Grid::new();
        assert!(!is_complete(&grid));

        // Shifted-band pattern, a valid complete solution
        for pos in Position::ALL {
            let value = (pos.row() * 3 + pos.row() / 3 + pos.col()) % 9 + 1;
            grid.set(pos, Digit::new(value)).unwrap();
        }
        assert!(is_complete(&grid));
    }
}
