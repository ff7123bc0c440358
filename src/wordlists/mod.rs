//! Word lists for the solver
//!
//! Provides the embedded default dictionary and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
