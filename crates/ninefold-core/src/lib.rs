//! Core data structures for the Ninefold puzzle engine.
//!
//! This crate provides the board model shared by puzzle generation and game
//! management: a 9×9 grid of optional digits whose writes are validated
//! against the classic row, column, and box uniqueness rules.
//!
//! # Overview
//!
//! The crate is organized around three main concepts:
//!
//! 1. **Core types** - Fundamental board vocabulary
//!    - [`digit`]: Type-safe representation of the digits 1-9
//!    - [`digit_set`]: Compact sets of digits with indexed draws
//!    - [`position`]: Board position (row, col) coordinates
//!    - [`house`]: The 27 uniqueness regions (rows, columns, boxes)
//!
//! 2. **The grid** - An owned 81-cell matrix
//!    - [`grid`]: [`Grid`] accepts a write only when the placed digit is
//!      unique within its three houses; reads and clears are unconditional.
//!
//! 3. **Placement rules** - The checks behind validated writes
//!    - [`rules`]: House scans generic over [`CellGrid`], usable both by
//!      [`Grid`] itself and by higher-level boards that carry extra state
//!      per cell.
//!
//! Failed writes report [`CellError::OutOfRange`] for values outside 1-9 and
//! [`CellError::Conflict`] for duplicates, naming the digit and the house
//! where it already appears.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Grid, House, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D4)).unwrap();
//!
//! // The same digit is rejected everywhere else in row 0
//! let conflict = grid.set(Position::new(0, 7), Some(Digit::D4)).unwrap_err();
//! assert_eq!(conflict.house, House::Row { row: 0 });
//!
//! // But an empty write is always accepted
//! grid.set(Position::new(0, 7), None).unwrap();
//! ```

pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod house;
pub mod position;
pub mod rules;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    error::{CellError, Conflict},
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
    rules::CellGrid,
};
