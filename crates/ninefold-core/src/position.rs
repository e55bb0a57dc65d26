//! Cell positions on the 9×9 board.

/// A board position addressed by row and column, each in 0-8.
///
/// Positions are ordered row-major: `(0,0)` through `(0,8)`, then `(1,0)`,
/// and so on. [`Position::ALL`] lists all 81 in that order, which is also
/// the order the generator's cursor visits cells.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 43);
///
/// assert_eq!(Position::ALL[0], Position::new(0, 0));
/// assert_eq!(Position::ALL[80], Position::new(8, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut row = 0u8;
        while row < 9 {
            let mut col = 0u8;
            while col < 9 {
                all[row as usize * 9 + col as usize] = Self { row, col };
                col += 1;
            }
            row += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of bounds");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the flattened row-major index (0-80).
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.row) * 9 + usize::from(self.col)
    }
}
