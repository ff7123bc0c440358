//! Engine error type

use crate::core::FeedbackError;
use std::fmt;

/// Failures reported by the constraint engine
///
/// An empty candidate set is not an error; it surfaces as `None` or
/// [`Recommendation::Exhausted`](super::Recommendation::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A position was confirmed as a different letter than before
    Conflict {
        position: usize,
        existing: char,
        attempted: char,
    },
    /// Feedback or guess text was rejected before any state changed
    Validation(FeedbackError),
    /// A scored letter is missing from the frequency index
    MissingKey(char),
    /// The word is not in the current candidate set
    NotACandidate(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict {
                position,
                existing,
                attempted,
            } => write!(
                f,
                "Position {position} already confirmed as '{existing}', cannot confirm '{attempted}'"
            ),
            Self::Validation(err) => write!(f, "{err}"),
            Self::MissingKey(letter) => {
                write!(f, "Letter '{letter}' is missing from the frequency index")
            }
            Self::NotACandidate(word) => write!(f, "'{word}' is not a current candidate"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FeedbackError> for GameError {
    fn from(err: FeedbackError) -> Self {
        Self::Validation(err)
    }
}
