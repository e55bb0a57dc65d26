//! The nine-cell units a digit may not repeat in.

use crate::Position;

/// A house: one row, column, or 3×3 box of the board.
///
/// Every placement rule is a uniqueness constraint over one house, so houses
/// double as the location payload of conflict errors ("digit 5 already
/// appears in row 3").
///
/// # Examples
///
/// ```
/// use ninefold_core::House;
///
/// let house = House::box_containing(4, 5);
/// assert_eq!(house, House::Box { index: 4 });
/// assert_eq!(house.positions().count(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum House {
    /// A row identified by its index (0-8, top to bottom).
    #[display("row {row}")]
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its index (0-8, left to right).
    #[display("column {col}")]
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    #[display("box {index}")]
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the box containing the cell at `(row, col)`.
    ///
    /// The box origin is found by snapping each coordinate down to a
    /// multiple of three.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn box_containing(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of bounds");
        let base_row = row - row % 3;
        let base_col = col - col % 3;
        Self::Box {
            index: base_row + base_col / 3,
        }
    }

    /// Returns the nine positions of this house, in reading order.
    #[must_use]
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9u8).map(move |i| match self {
            Self::Row { row } => Position::new(row, i),
            Self::Column { col } => Position::new(i, col),
            Self::Box { index } => {
                let base_row = index - index % 3;
                let base_col = (index % 3) * 3;
                Position::new(base_row + i / 3, base_col + i % 3)
            }
        })
    }
}
