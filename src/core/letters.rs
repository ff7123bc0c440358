//! Compact set of lowercase ASCII letters
//!
//! One bit per letter `a..=z`, so membership and union are single
//! integer operations during candidate filtering.

use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Mask bit for `letter`, zero for anything outside `a..=z`
    #[inline]
    const fn bit(letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            1 << (letter - b'a')
        } else {
            0
        }
    }

    /// Build a set from the letters of a byte string
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::LetterSet;
    ///
    /// let set = LetterSet::from_bytes(b"geese");
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(b's'));
    /// ```
    #[must_use]
    pub fn from_bytes(letters: &[u8]) -> Self {
        letters
            .iter()
            .fold(Self::EMPTY, |set, &letter| set.with(letter))
    }

    /// Return a copy of this set with `letter` added; non-letters are ignored
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub const fn insert(&mut self, letter: u8) -> bool {
        let before = self.0;
        self.0 |= Self::bit(letter);
        before != self.0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_novelty() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'q'));
        assert!(!set.insert(b'q'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn superset_checks() {
        let word = LetterSet::from_bytes(b"wince");
        assert!(word.is_superset(LetterSet::from_bytes(b"ie")));
        assert!(word.is_superset(LetterSet::EMPTY));
        assert!(!word.is_superset(LetterSet::from_bytes(b"iz")));
    }

    #[test]
    fn display_is_alphabetical() {
        let set: LetterSet = b"sora".iter().copied().collect();
        assert_eq!(set.to_string(), "aors");
    }

    #[test]
    fn non_letters_are_ignored_on_insert() {
        let mut set = LetterSet::from_bytes(b"a_Z{");
        assert_eq!(set.len(), 1);
        assert!(!set.insert(b'`'));
        assert!(!set.insert(0xff));
        let collected: LetterSet = b"B b".iter().copied().collect();
        assert_eq!(collected, LetterSet::EMPTY.with(b'b'));
    }

    #[test]
    fn non_letters_are_never_contained() {
        let set = LetterSet::from_bytes(b"abc");
        assert!(!set.contains(b'_'));
        assert!(!set.contains(b'A'));
    }
}
