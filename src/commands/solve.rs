//! Word solving command
//!
//! Plays a full game against a known target and returns the solution path.

use crate::core::{
    Dictionary, FeedbackEncoding, Mark, UsageTable, Word, calculate_marks, is_solved,
};
use crate::solver::{FrequencyIndex, Game};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub debug: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            debug: false,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    /// The constraints ruled out every word before the target was found
    pub exhausted: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub marks: Vec<Mark>,
    pub score: u64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word by always playing the recommended guess
///
/// Feedback is computed with the puzzle's exact duplicate-letter rules and
/// fed back through [`Game::apply_feedback`], so the engine's simplified
/// duplicate handling can occasionally rule out the target.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or has the wrong length
/// - The target word is not in the dictionary
/// - The engine reports a scoring or feedback error
pub fn solve_word(
    config: SolveConfig,
    dictionary: &Dictionary,
    index: &FrequencyIndex,
    usage: Option<&UsageTable>,
) -> Result<SolveResult, String> {
    let target = Word::new(config.target.as_str())
        .map_err(|e| format!("Invalid target word: {e}"))?;
    if dictionary.find(target.text()).is_none() {
        return Err(format!("Word '{}' not in word list", config.target));
    }

    let mut game = Game::new(dictionary, index, usage);
    game.set_debug(config.debug);

    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut next = game.best_candidate().map_err(|e| e.to_string())?;

    for _ in 0..config.max_guesses {
        let Some(guess) = next else {
            return Ok(SolveResult {
                success: false,
                exhausted: true,
                guesses,
                target: config.target,
            });
        };

        let candidates_before = game.candidate_count();
        let score = index.score(guess).map_err(|e| e.to_string())?;
        let marks = calculate_marks(guess, &target);
        let feedback = FeedbackEncoding::Colors.encode(guess, &marks);

        next = game
            .apply_feedback(guess.text(), &feedback, FeedbackEncoding::Colors)
            .map_err(|e| e.to_string())?
            .word();

        let solved = is_solved(&marks);
        guesses.push(GuessStep {
            word: guess.text().to_string(),
            marks,
            score,
            candidates_before,
            candidates_after: game.candidate_count(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                exhausted: false,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        exhausted: next.is_none(),
        guesses,
        target: config.target,
    })
}
