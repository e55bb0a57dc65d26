//! Validation failures reported by cell writes.

use crate::{Digit, House};

/// A duplicate-digit failure: placing the digit would repeat it in a house.
///
/// Conflicts are routine during generation (the fill walk probes candidates
/// until one fits) and are surfaced to players as input rejection. They are
/// never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit {digit} already appears in {house}")]
pub struct Conflict {
    /// The digit whose placement was rejected.
    pub digit: Digit,
    /// The house already containing that digit.
    pub house: House,
}

/// The failures a validated cell write can report.
///
/// These two are the only error kinds of the validation surface: a value
/// outside 1-9, or a duplicate within a row, column, or box. Writing an empty
/// value never fails.
///
/// # Examples
///
/// ```
/// use ninefold_core::{CellError, Grid, Position};
///
/// let mut grid = Grid::new();
/// let err = grid.set_value(Position::new(0, 0), Some(12)).unwrap_err();
/// assert_eq!(err, CellError::OutOfRange { value: 12 });
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum CellError {
    /// The written value lies outside the digit range 1-9.
    #[display("cell value must be between 1 and 9, got {value}")]
    OutOfRange {
        /// The rejected raw value.
        value: u8,
    },
    /// The written value would duplicate a digit in one of the cell's houses.
    #[display("{_0}")]
    Conflict(#[from] Conflict),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_digit_and_house() {
        let conflict = Conflict {
            digit: Digit::D5,
            house: House::Row { row: 3 },
        };
        assert_eq!(conflict.to_string(), "digit 5 already appears in row 3");

        let error = CellError::from(conflict);
        assert_eq!(error.to_string(), "digit 5 already appears in row 3");

        let error = CellError::OutOfRange { value: 200 };
        assert_eq!(error.to_string(), "cell value must be between 1 and 9, got 200");
    }
}
