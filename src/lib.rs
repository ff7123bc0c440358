//! Wordle Constraints
//!
//! A constraint-tracking Wordle assistant: records green, yellow and grey
//! feedback, filters a dictionary down to the words still possible, and
//! recommends the candidate whose letters cover the most dictionary words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_constraints::core::{Dictionary, FeedbackEncoding, Word};
//! use wordle_constraints::solver::{FrequencyIndex, Game};
//!
//! let words = ["arose", "tilde", "mince", "wince"].map(|w| Word::new(w).unwrap());
//! let dictionary = Dictionary::new(words, 5).unwrap();
//! let index = FrequencyIndex::build(&dictionary);
//! let mut game = Game::new(&dictionary, &index, None);
//!
//! let next = game.apply_feedback("arose", "____g", FeedbackEncoding::Colors).unwrap();
//! assert_eq!(next.word().map(|w| w.text()), Some("mince"));
//! ```

// Core domain types
pub mod core;

// Constraint tracking and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
