//! Word analysis command
//!
//! Breaks a word's score down into the index counts of its letters.

use crate::core::{Dictionary, Word};
use crate::solver::{FrequencyIndex, Game};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Distinct letters with the number of dictionary words containing each
    pub letters: Vec<(char, u32)>,
    pub score: u64,
    /// 1-based position among all dictionary words by score, if the word is
    /// in the dictionary
    pub rank: Option<usize>,
    /// Highest score of any dictionary word
    pub best_score: u64,
    pub dictionary_size: usize,
}

/// Analyze the letter-coverage score of a word
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or has the wrong length
/// - The word uses a letter that no dictionary word contains
pub fn analyze_word(
    word: &str,
    dictionary: &Dictionary,
    index: &FrequencyIndex,
) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    if word_obj.len() != dictionary.word_length() {
        return Err(format!(
            "Word '{word}' must have {} letters",
            dictionary.word_length()
        ));
    }

    let score = index.score(&word_obj).map_err(|e| e.to_string())?;
    let letters = word_obj
        .letters()
        .iter()
        .map(|letter| {
            let letter = char::from(letter);
            (letter, index.count(&letter.to_string()).unwrap_or(0))
        })
        .collect();

    let mut game = Game::new(dictionary, index, None);
    let ranked = game.best_candidates().map_err(|e| e.to_string())?;
    let rank = ranked
        .iter()
        .position(|(candidate, _)| candidate.text() == word_obj.text())
        .map(|position| position + 1);
    let best_score = ranked.first().map_or(0, |&(_, best)| best);

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        letters,
        score,
        rank,
        best_score,
        dictionary_size: dictionary.len(),
    })
}
