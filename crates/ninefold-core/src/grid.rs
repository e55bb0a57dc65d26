//! The 9×9 digit grid with validated writes.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    CellError, Conflict, Digit, Position,
    rules::{self, CellGrid},
};

/// A 9×9 grid of optional digits whose writes preserve house uniqueness.
///
/// The grid owns its 81 cells and maintains one invariant: no digit appears
/// twice in any row, column, or 3×3 box. Reads ([`Grid::get`]) are plain
/// lookups; writes go through [`Grid::set`] or [`Grid::set_value`], which run
/// the placement rules first and leave the grid untouched on rejection.
/// Clearing a cell always succeeds.
///
/// A grid converts to and from an 81-character string: digits `1`-`9` for
/// filled cells, `.`/`_`/`0` for empty ones, whitespace ignored.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5)).unwrap();
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
///
/// // A second 5 in row 0 is rejected and the grid is unchanged
/// assert!(grid.set(Position::new(0, 8), Some(Digit::D5)).is_err());
/// assert_eq!(grid.get(Position::new(0, 8)), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Writes `value` at `pos` if doing so keeps every house duplicate-free.
    ///
    /// The row, column, and box checks run in that order against the current
    /// cells, the target cell included. Writing `None` always succeeds; see
    /// [`Grid::clear`] for the error-free form.
    ///
    /// # Errors
    ///
    /// Returns the first [`Conflict`] found among the cell's three houses;
    /// the grid is unchanged on error.
    pub fn set(&mut self, pos: Position, value: Option<Digit>) -> Result<(), Conflict> {
        if let Some(digit) = value {
            rules::check_placement(self, pos, digit)?;
        }
        self.cells[pos.index()] = value;
        Ok(())
    }

    /// Writes a raw value at `pos`: range check first, then the placement
    /// checks of [`Grid::set`]. `None` clears the cell unconditionally.
    ///
    /// This is the entry point for untrusted input; code that already holds
    /// a [`Digit`] can call [`Grid::set`] directly and skip the range check.
    ///
    /// # Errors
    ///
    /// [`CellError::OutOfRange`] if `value` is outside 1-9, or
    /// [`CellError::Conflict`] if placing it would duplicate a digit.
    pub fn set_value(&mut self, pos: Position, value: Option<u8>) -> Result<(), CellError> {
        let digit = match value {
            Some(raw) => Some(Digit::new(raw).ok_or(CellError::OutOfRange { value: raw })?),
            None => None,
        };
        self.set(pos, digit)?;
        Ok(())
    }

    /// Clears the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        rules::is_complete(self)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl CellGrid for Grid {
    fn digit_at(&self, pos: Position) -> Option<Digit> {
        self.get(pos)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self.get(pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, pos) in Position::ALL.iter().enumerate() {
            if index > 0 && index % 9 == 0 {
                writeln!(f)?;
            }
            match self.get(*pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

/// The reasons an 81-character grid string fails to parse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseGridError {
    /// The string holds the wrong number of cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cell characters found.
        count: usize,
    },
    /// A character is neither a digit, an empty-cell marker, nor whitespace.
    #[display("invalid cell character {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The described arrangement repeats a digit within a house.
    #[display("{_0}")]
    Conflict(#[from] Conflict),
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut positions = Position::ALL.iter();
        let mut count = 0usize;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let value = match character {
                '.' | '_' | '0' => None,
                '1' => Some(Digit::D1),
                '2' => Some(Digit::D2),
                '3' => Some(Digit::D3),
                '4' => Some(Digit::D4),
                '5' => Some(Digit::D5),
                '6' => Some(Digit::D6),
                '7' => Some(Digit::D7),
                '8' => Some(Digit::D8),
                '9' => Some(Digit::D9),
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            count += 1;
            if let Some(pos) = positions.next() {
                grid.set(*pos, value)?;
            }
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}
