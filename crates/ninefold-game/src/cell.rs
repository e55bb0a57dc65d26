//! A single playable cell.

use ninefold_core::{Digit, DigitSet};

/// One cell of a [`PuzzleBoard`](crate::PuzzleBoard): its value, the
/// player's pencilled notes, and whether the cell was dealt as a given.
///
/// Value and notes are independent. Writing a value does not erase notes,
/// so clearing a guess brings the player's pencil marks back.
///
/// The `editable` flag records provenance: revealed cells are dealt
/// non-editable and player cells editable. The board stores the flag and
/// reports it for interfaces to honor; it does not block writes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleCell {
    value: Option<Digit>,
    notes: DigitSet,
    editable: bool,
}

impl PuzzleCell {
    /// A cell dealt with a revealed digit. Not editable.
    pub(crate) const fn given(digit: Digit) -> Self {
        Self {
            value: Some(digit),
            notes: DigitSet::EMPTY,
            editable: false,
        }
    }

    /// A cell dealt empty, for the player to fill.
    pub(crate) const fn empty() -> Self {
        Self {
            value: None,
            notes: DigitSet::EMPTY,
            editable: true,
        }
    }

    /// Rebuilds a cell from saved parts.
    pub(crate) const fn from_parts(value: Option<Digit>, notes: DigitSet, editable: bool) -> Self {
        Self {
            value,
            notes,
            editable,
        }
    }

    /// The digit in this cell, or `None` if it is empty.
    #[must_use]
    pub const fn value(self) -> Option<Digit> {
        self.value
    }

    /// The digits the player has pencilled in, in ascending order.
    #[must_use]
    pub const fn notes(self) -> DigitSet {
        self.notes
    }

    /// Whether this cell belongs to the player rather than to the deal.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        self.editable
    }

    pub(crate) fn write_value(&mut self, value: Option<Digit>) {
        self.value = value;
    }

    pub(crate) fn toggle_note(&mut self, digit: Digit) -> bool {
        self.notes.toggle(digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dealt_cells() {
        let given = PuzzleCell::given(Digit::D4);
        assert_eq!(given.value(), Some(Digit::D4));
        assert_eq!(given.notes(), DigitSet::EMPTY);
        assert!(!given.is_editable());

        let empty = PuzzleCell::empty();
        assert_eq!(empty.value(), None);
        assert!(empty.is_editable());
    }

    #[test]
    fn test_value_and_notes_are_independent() {
        let mut cell = PuzzleCell::empty();
        assert!(cell.toggle_note(Digit::D2));
        assert!(cell.toggle_note(Digit::D7));

        cell.write_value(Some(Digit::D2));
        assert_eq!(cell.value(), Some(Digit::D2));
        assert!(cell.notes().contains(Digit::D2));

        cell.write_value(None);
        assert!(cell.notes().contains(Digit::D7));
    }

    #[test]
    fn test_toggle_note_reports_presence_after() {
        let mut cell = PuzzleCell::empty();
        assert!(cell.toggle_note(Digit::D5));
        assert!(!cell.toggle_note(Digit::D5));
        assert_eq!(cell.notes(), DigitSet::EMPTY);
    }
}
