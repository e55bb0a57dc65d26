//! Playable sessions on top of generated puzzles.
//!
//! This crate turns a [`GeneratedPuzzle`](ninefold_generator::GeneratedPuzzle)
//! into something a player can interact with:
//!
//! - [`PuzzleBoard`] deals the problem grid onto 81 [`PuzzleCell`]s, keeping
//!   values, pencilled notes, and the given/player distinction per cell, and
//!   validates every player write against the placement rules.
//! - [`SavedGame`] captures a session as a flat cell list plus seed and
//!   elapsed time, and restores it without re-running the generator.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Position;
//! use ninefold_game::PuzzleBoard;
//! use ninefold_generator::generate_with_seed;
//!
//! let puzzle = generate_with_seed(42);
//! let mut board = PuzzleBoard::new(&puzzle);
//!
//! // Fill the first open cell with one of its legal digits
//! let open = *Position::ALL
//!     .iter()
//!     .find(|&&pos| board.cell(pos).value().is_none())
//!     .expect("puzzle has empty cells");
//! let digit = board
//!     .candidates(open)
//!     .into_iter()
//!     .next()
//!     .expect("open cell has a candidate");
//! board.set_value(open, Some(digit.value())).unwrap();
//!
//! assert_eq!(board.cell(open).value(), Some(digit));
//! assert!(!board.is_solved());
//! ```

pub mod board;
pub mod cell;
pub mod saved;

// Re-export commonly used types
pub use self::{
    board::PuzzleBoard,
    cell::PuzzleCell,
    saved::{RestoreError, SavedCell, SavedGame},
};
