//! Puzzle feedback marks and their text encodings
//!
//! Every guessed position receives one of three marks:
//! - Confirmed: the letter occupies exactly this position
//! - Present elsewhere: the letter is in the answer at another position
//! - Absent: the letter is treated as missing from the answer
//!
//! Two text grammars describe a row of marks, selected by [`FeedbackEncoding`].

use super::Word;
use std::fmt;

/// Feedback for a single guessed position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    PresentElsewhere,
    Confirmed,
}

/// Text grammar used to describe a row of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackEncoding {
    /// One color token per position: `g` green, `y` yellow, `b`/`_`/space
    /// absent, case-insensitive. Anything else is rejected.
    #[default]
    Colors,
    /// Uppercase letter confirmed, lowercase letter present elsewhere, any
    /// other character absent. Never rejects a symbol.
    Case,
}

/// Error type for feedback that cannot be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidSymbol { position: usize, symbol: char },
    TooLong { expected: usize, actual: usize },
    InvalidGuess { guess: String, expected: usize },
    PositionOutOfRange { position: usize, length: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { position, symbol } => {
                write!(f, "Invalid feedback symbol '{symbol}' at position {position}")
            }
            Self::TooLong { expected, actual } => {
                write!(f, "Feedback has {actual} symbols, expected at most {expected}")
            }
            Self::InvalidGuess { guess, expected } => {
                write!(f, "Guess '{guess}' is not a {expected}-letter word")
            }
            Self::PositionOutOfRange { position, length } => {
                write!(f, "Position {position} is outside a {length}-letter word")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl FeedbackEncoding {
    /// Look up an encoding by name ("colors"/"color" or "case")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "colors" | "color" | "colours" => Some(Self::Colors),
            "case" => Some(Self::Case),
            _ => None,
        }
    }

    /// Parse a feedback row into one mark per position
    ///
    /// Input shorter than `length` is padded with absent marks.
    ///
    /// # Errors
    /// Returns `FeedbackError::TooLong` for input longer than `length`, and
    /// `FeedbackError::InvalidSymbol` for an unknown color token. No marks
    /// are returned on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{FeedbackEncoding, Mark};
    ///
    /// let marks = FeedbackEncoding::Colors.decode("g_Y", 5).unwrap();
    /// assert_eq!(marks[0], Mark::Confirmed);
    /// assert_eq!(marks[2], Mark::PresentElsewhere);
    /// assert_eq!(marks[4], Mark::Absent);
    ///
    /// assert!(FeedbackEncoding::Colors.decode("G?Y__", 5).is_err());
    /// ```
    pub fn decode(self, feedback: &str, length: usize) -> Result<Vec<Mark>, FeedbackError> {
        let actual = feedback.chars().count();
        if actual > length {
            return Err(FeedbackError::TooLong {
                expected: length,
                actual,
            });
        }

        let mut marks = Vec::with_capacity(length);
        for (position, symbol) in feedback.chars().enumerate() {
            let mark = match self {
                Self::Case => {
                    if symbol.is_ascii_uppercase() {
                        Mark::Confirmed
                    } else if symbol.is_ascii_lowercase() {
                        Mark::PresentElsewhere
                    } else {
                        Mark::Absent
                    }
                }
                Self::Colors => match symbol.to_ascii_lowercase() {
                    'g' => Mark::Confirmed,
                    'y' => Mark::PresentElsewhere,
                    'b' | '_' | ' ' => Mark::Absent,
                    _ => return Err(FeedbackError::InvalidSymbol { position, symbol }),
                },
            };
            marks.push(mark);
        }
        marks.resize(length, Mark::Absent);

        Ok(marks)
    }

    /// Render marks for `guess` in this encoding
    ///
    /// # Panics
    /// Panics if `marks` is longer than the guess.
    #[must_use]
    pub fn encode(self, guess: &Word, marks: &[Mark]) -> String {
        marks
            .iter()
            .enumerate()
            .map(|(i, mark)| match (self, mark) {
                (Self::Colors, Mark::Confirmed) => 'G',
                (Self::Colors, Mark::PresentElsewhere) => 'Y',
                (Self::Case, Mark::Confirmed) => char::from(guess.char_at(i).to_ascii_uppercase()),
                (Self::Case, Mark::PresentElsewhere) => char::from(guess.char_at(i)),
                (_, Mark::Absent) => '_',
            })
            .collect()
    }
}

/// Calculate the exact feedback when `guess` is played against `answer`
///
/// Follows the puzzle's duplicate-letter rules: confirmed positions consume
/// their letter first, then present-elsewhere marks are handed out left to
/// right while unmatched copies remain.
///
/// # Examples
/// ```
/// use wordle_constraints::core::{Mark, Word, calculate_marks};
///
/// let guess = Word::new("tilde").unwrap();
/// let answer = Word::new("wince").unwrap();
/// let marks = calculate_marks(&guess, &answer);
///
/// assert_eq!(marks[1], Mark::Confirmed);
/// assert_eq!(marks[4], Mark::Confirmed);
/// assert_eq!(marks[0], Mark::Absent);
/// ```
#[must_use]
pub fn calculate_marks(guess: &Word, answer: &Word) -> Vec<Mark> {
    let mut result = vec![Mark::Absent; guess.len()];
    let mut answer_available = answer.char_counts();

    // First pass: exact position matches
    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            result[i] = Mark::Confirmed;
            if let Some(count) = answer_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: right letter, wrong position
    for (i, &letter) in guess.chars().iter().enumerate() {
        if result[i] == Mark::Absent
            && let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            result[i] = Mark::PresentElsewhere;
            *count -= 1;
        }
    }

    result
}

/// True when every mark is confirmed
#[must_use]
pub fn is_solved(marks: &[Mark]) -> bool {
    marks.iter().all(|&m| m == Mark::Confirmed)
}

/// Convert marks to an emoji string such as "⬜🟩⬜⬜🟩"
#[must_use]
pub fn to_emoji(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            Mark::Confirmed => '🟩',
            Mark::PresentElsewhere => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn case_encoding_classes() {
        let marks = FeedbackEncoding::Case.decode("_I_cE", 5).unwrap();
        assert_eq!(
            marks,
            [
                Mark::Absent,
                Mark::Confirmed,
                Mark::Absent,
                Mark::PresentElsewhere,
                Mark::Confirmed,
            ]
        );
    }

    #[test]
    fn case_encoding_treats_any_symbol_as_absent() {
        let marks = FeedbackEncoding::Case.decode("?- .!", 5).unwrap();
        assert!(marks.iter().all(|&m| m == Mark::Absent));
    }

    #[test]
    fn colors_encoding_is_case_insensitive() {
        let lower = FeedbackEncoding::Colors.decode("gyb_ ", 5).unwrap();
        let upper = FeedbackEncoding::Colors.decode("GYB_ ", 5).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower[0], Mark::Confirmed);
        assert_eq!(lower[1], Mark::PresentElsewhere);
        assert_eq!(&lower[2..], &[Mark::Absent; 3]);
    }

    #[test]
    fn colors_encoding_rejects_unknown_symbol() {
        assert_eq!(
            FeedbackEncoding::Colors.decode("G?Y__", 5),
            Err(FeedbackError::InvalidSymbol {
                position: 1,
                symbol: '?'
            })
        );
        assert!(FeedbackEncoding::Colors.decode("GXGGY", 5).is_err());
    }

    #[test]
    fn short_feedback_is_padded_absent() {
        let marks = FeedbackEncoding::Colors.decode("gg", 5).unwrap();
        assert_eq!(marks.len(), 5);
        assert_eq!(&marks[2..], &[Mark::Absent; 3]);
    }

    #[test]
    fn long_feedback_is_rejected() {
        assert_eq!(
            FeedbackEncoding::Case.decode("ABCDEF", 5),
            Err(FeedbackError::TooLong {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn encode_matches_decode() {
        let guess = word("mince");
        let marks = calculate_marks(&guess, &word("wince"));
        for encoding in [FeedbackEncoding::Colors, FeedbackEncoding::Case] {
            let text = encoding.encode(&guess, &marks);
            assert_eq!(encoding.decode(&text, 5).unwrap(), marks);
        }
        assert_eq!(FeedbackEncoding::Case.encode(&guess, &marks), "_INCE");
        assert_eq!(FeedbackEncoding::Colors.encode(&guess, &marks), "_GGGG");
    }

    #[test]
    fn marks_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let marks = calculate_marks(&word("robot"), &word("floor"));
        assert_eq!(
            marks,
            [
                Mark::PresentElsewhere,
                Mark::PresentElsewhere,
                Mark::Absent,
                Mark::Confirmed,
                Mark::Absent,
            ]
        );
    }

    #[test]
    fn marks_extra_copies_are_absent() {
        // SPEED vs ABIDE: only one E is available
        let marks = calculate_marks(&word("speed"), &word("abide"));
        assert_eq!(marks[2], Mark::PresentElsewhere);
        assert_eq!(marks[3], Mark::Absent);
    }

    #[test]
    fn solved_and_emoji() {
        let marks = calculate_marks(&word("wince"), &word("wince"));
        assert!(is_solved(&marks));
        assert_eq!(to_emoji(&marks), "🟩🟩🟩🟩🟩");

        let marks = calculate_marks(&word("arose"), &word("wince"));
        assert!(!is_solved(&marks));
        assert_eq!(to_emoji(&marks), "⬜⬜⬜⬜🟩");
    }

    #[test]
    fn encoding_from_name() {
        assert_eq!(FeedbackEncoding::from_name("Colors"), Some(FeedbackEncoding::Colors));
        assert_eq!(FeedbackEncoding::from_name("case"), Some(FeedbackEncoding::Case));
        assert_eq!(FeedbackEncoding::from_name("emoji"), None);
    }
}
