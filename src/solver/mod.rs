//! Constraint engine
//!
//! Accumulates feedback into letter constraints, keeps the candidate set
//! consistent with them, and ranks candidates with the frequency index.

mod constraints;
mod error;
mod frequency;
mod game;

pub use constraints::{Constraints, PositionalPattern, Slot};
pub use error::GameError;
pub use frequency::FrequencyIndex;
pub use game::{Game, Recommendation, UNKNOWN_USAGE_SENTINEL};
