//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no engine logic.
//! All types here are pure, testable, and have clear invariants.

mod dictionary;
mod feedback;
mod letters;
mod word;

pub use dictionary::{Dictionary, DictionaryError, UsageTable};
pub use feedback::{
    FeedbackEncoding, FeedbackError, Mark, calculate_marks, is_solved, to_emoji,
};
pub use letters::LetterSet;
pub use word::{Word, WordError};
