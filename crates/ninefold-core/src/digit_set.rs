//! Sets of digits, stored as a 9-bit mask.

use std::fmt;

use crate::Digit;

/// A set of digits 1-9.
///
/// Backed by a single `u16` with one bit per digit, so it is `Copy` and all
/// operations are O(1). Iteration always yields digits in ascending order,
/// which keeps note lists sorted and makes indexed draws ([`DigitSet::select`])
/// reproducible.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D7);
/// set.insert(Digit::D2);
/// assert!(set.contains(Digit::D7));
/// assert_eq!(set.len(), 2);
///
/// // Ascending iteration regardless of insertion order
/// let digits: Vec<_> = set.into_iter().collect();
/// assert_eq!(digits, vec![Digit::D2, Digit::D7]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(0x1ff);

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Flips a digit's membership and returns whether it is now present.
    pub fn toggle(&mut self, digit: Digit) -> bool {
        self.0 ^= Self::bit(digit);
        self.contains(digit)
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        #[expect(clippy::cast_possible_truncation)]
        let len = self.0.count_ones() as usize;
        len
    }

    /// Returns whether the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the `index`-th digit in ascending order, or `None` if the set
    /// holds fewer than `index + 1` digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, DigitSet};
    ///
    /// let set: DigitSet = [Digit::D3, Digit::D5, Digit::D8].into_iter().collect();
    /// assert_eq!(set.select(0), Some(Digit::D3));
    /// assert_eq!(set.select(2), Some(Digit::D8));
    /// assert_eq!(set.select(3), None);
    /// ```
    #[must_use]
    pub fn select(self, index: usize) -> Option<Digit> {
        self.into_iter().nth(index)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.into_iter().map(u8::from)).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        DigitSetIter { bits: self.0 }
    }
}

/// Ascending iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct DigitSetIter {
    bits: u16,
}

impl Iterator for DigitSetIter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Digit::new(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = DigitSet(self.bits).len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for DigitSetIter {}

impl std::iter::FusedIterator for DigitSetIter {}
