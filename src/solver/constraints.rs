//! Accumulated letter constraints
//!
//! Three independent facts collected from feedback:
//! - `confirmed`: the letter known to occupy each position
//! - `eliminated`: letters treated as absent from the answer
//! - `somewhere_else`: per position, letters present in the answer but not there
//!
//! Known limitation: duplicate letters are not modelled. An absent mark is a
//! blanket elimination even when another copy of the letter was confirmed or
//! present, and a present mark only requires one occurrence of the letter.

use super::GameError;
use crate::core::{FeedbackError, LetterSet, Word};
use std::fmt;

/// Constraint on a single position of the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The position holds exactly this letter
    Exactly(u8),
    /// The position holds any letter outside this set
    Excluding(LetterSet),
}

impl Slot {
    #[inline]
    #[must_use]
    pub const fn admits(self, letter: u8) -> bool {
        match self {
            Self::Exactly(expected) => expected == letter,
            Self::Excluding(set) => !set.contains(letter),
        }
    }
}

/// Per-position constraints derived from the current state
///
/// Displays as a regular-expression-like string such as
/// `[^aors][^aors][^aors][^aors]e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalPattern {
    slots: Vec<Slot>,
}

impl PositionalPattern {
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// True when every position of `word` satisfies its slot
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(slot, &letter)| slot.admits(letter))
    }
}

impl fmt::Display for PositionalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Exactly(letter) => write!(f, "{}", char::from(*letter))?,
                Slot::Excluding(set) if set.is_empty() => write!(f, ".")?,
                Slot::Excluding(set) => write!(f, "[^{set}]")?,
            }
        }
        Ok(())
    }
}

/// Letter constraints accumulated over one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    confirmed: Vec<Option<u8>>,
    eliminated: LetterSet,
    somewhere_else: Vec<LetterSet>,
}

impl Constraints {
    /// Unconstrained state for `length`-letter words
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            confirmed: vec![None; length],
            eliminated: LetterSet::EMPTY,
            somewhere_else: vec![LetterSet::EMPTY; length],
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.confirmed.len()
    }

    /// Confirmed letter per position
    #[must_use]
    pub fn confirmed(&self) -> &[Option<u8>] {
        &self.confirmed
    }

    #[must_use]
    pub const fn eliminated(&self) -> LetterSet {
        self.eliminated
    }

    /// Letters known present but not at `position`
    ///
    /// # Panics
    /// Panics if `position` is out of range.
    #[must_use]
    pub fn somewhere_else(&self, position: usize) -> LetterSet {
        self.somewhere_else[position]
    }

    /// Every letter ever marked present elsewhere, over all positions
    #[must_use]
    pub fn required_letters(&self) -> LetterSet {
        self.somewhere_else
            .iter()
            .fold(LetterSet::EMPTY, |acc, &set| acc.union(set))
    }

    /// Record that `position` is exactly `letter`
    ///
    /// Returns `true` if the state changed. Confirming the same letter again
    /// is a no-op.
    ///
    /// # Errors
    /// Returns `GameError::Conflict` if the position already holds another
    /// letter, or `GameError::Validation` for a non-letter or out-of-range
    /// position. State is untouched on error.
    pub fn confirm(&mut self, letter: u8, position: usize) -> Result<bool, GameError> {
        let letter = self.check(letter, position)?;
        match self.confirmed[position] {
            Some(existing) if existing == letter => Ok(false),
            Some(existing) => Err(GameError::Conflict {
                position,
                existing: char::from(existing),
                attempted: char::from(letter),
            }),
            None => {
                self.confirmed[position] = Some(letter);
                Ok(true)
            }
        }
    }

    /// Record that `letter` is absent from the answer
    ///
    /// Returns `true` if the state changed.
    ///
    /// # Errors
    /// Returns `GameError::Validation` if `letter` is not an ASCII letter.
    pub fn eliminate(&mut self, letter: u8) -> Result<bool, GameError> {
        let letter = Self::check_letter(letter, 0)?;
        Ok(self.eliminated.insert(letter))
    }

    /// Record that `letter` is in the answer, but not at `position`
    ///
    /// Returns `true` if the state changed.
    ///
    /// # Errors
    /// Returns `GameError::Validation` for a non-letter or out-of-range
    /// position.
    pub fn mark_present_elsewhere(&mut self, letter: u8, position: usize) -> Result<bool, GameError> {
        let letter = self.check(letter, position)?;
        Ok(self.somewhere_else[position].insert(letter))
    }

    /// Derive the positional pattern
    ///
    /// A confirmed position requires its letter; any other position rejects
    /// eliminated letters and the letters marked present elsewhere there.
    #[must_use]
    pub fn pattern(&self) -> PositionalPattern {
        let slots = self
            .confirmed
            .iter()
            .zip(&self.somewhere_else)
            .map(|(confirmed, &elsewhere)| match confirmed {
                Some(letter) => Slot::Exactly(*letter),
                None => Slot::Excluding(self.eliminated.union(elsewhere)),
            })
            .collect();

        PositionalPattern { slots }
    }

    fn check(&self, letter: u8, position: usize) -> Result<u8, GameError> {
        if position >= self.word_length() {
            return Err(FeedbackError::PositionOutOfRange {
                position,
                length: self.word_length(),
            }
            .into());
        }
        Self::check_letter(letter, position)
    }

    fn check_letter(letter: u8, position: usize) -> Result<u8, GameError> {
        if letter.is_ascii_alphabetic() {
            Ok(letter.to_ascii_lowercase())
        } else {
            Err(FeedbackError::InvalidSymbol {
                position,
                symbol: char::from(letter),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn confirm_same_letter_twice_is_noop() {
        let mut constraints = Constraints::new(5);
        assert_eq!(constraints.confirm(b'e', 4), Ok(true));
        let before = constraints.clone();
        assert_eq!(constraints.confirm(b'E', 4), Ok(false));
        assert_eq!(constraints, before);
    }

    #[test]
    fn confirm_conflict_leaves_state() {
        let mut constraints = Constraints::new(5);
        constraints.confirm(b'e', 4).unwrap();
        let before = constraints.clone();

        let err = constraints.confirm(b'y', 4).unwrap_err();
        assert_eq!(
            err,
            GameError::Conflict {
                position: 4,
                existing: 'e',
                attempted: 'y'
            }
        );
        assert!(err.to_string().contains("Position 4"));
        assert!(err.to_string().contains("'e'"));
        assert_eq!(constraints, before);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let mut constraints = Constraints::new(5);
        assert!(matches!(
            constraints.confirm(b'a', 5),
            Err(GameError::Validation(FeedbackError::PositionOutOfRange { .. }))
        ));
        assert!(matches!(
            constraints.eliminate(b'_'),
            Err(GameError::Validation(FeedbackError::InvalidSymbol { .. }))
        ));
        assert_eq!(constraints, Constraints::new(5));
    }

    #[test]
    fn eliminate_is_idempotent() {
        let mut constraints = Constraints::new(5);
        assert_eq!(constraints.eliminate(b'm'), Ok(true));
        assert_eq!(constraints.eliminate(b'm'), Ok(false));
        assert_eq!(constraints.eliminated().len(), 1);
    }

    #[test]
    fn pattern_display() {
        let mut constraints = Constraints::new(5);
        assert_eq!(constraints.pattern().to_string(), ".....");

        for letter in *b"aros" {
            constraints.eliminate(letter).unwrap();
        }
        constraints.confirm(b'e', 4).unwrap();
        constraints.mark_present_elsewhere(b'i', 0).unwrap();
        assert_eq!(
            constraints.pattern().to_string(),
            "[^aiors][^aors][^aors][^aors]e"
        );
    }

    #[test]
    fn pattern_matches_slots() {
        let mut constraints = Constraints::new(5);
        constraints.confirm(b'e', 4).unwrap();
        constraints.eliminate(b'm').unwrap();
        let pattern = constraints.pattern();

        assert!(pattern.matches(&word("wince")));
        assert!(pattern.matches(&word("since")));
        assert!(!pattern.matches(&word("mince")));
        assert!(!pattern.matches(&word("winch")));
        assert!(!pattern.matches(&word("ox")));
    }

    #[test]
    fn present_elsewhere_excludes_only_its_position() {
        let mut constraints = Constraints::new(5);
        constraints.mark_present_elsewhere(b'i', 0).unwrap();
        let pattern = constraints.pattern();

        assert!(pattern.matches(&word("wince")));
        assert!(pattern.matches(&word("lemon")));
        assert!(!pattern.matches(&word("icons")));
        assert_eq!(constraints.required_letters(), LetterSet::from_bytes(b"i"));
    }

    #[test]
    fn eliminated_letter_at_confirmed_position_still_matches() {
        let mut constraints = Constraints::new(5);
        constraints.confirm(b'e', 4).unwrap();
        constraints.eliminate(b'e').unwrap();
        let pattern = constraints.pattern();

        assert!(pattern.matches(&word("wince")));
        assert!(!pattern.matches(&word("eerie")));
    }
}
