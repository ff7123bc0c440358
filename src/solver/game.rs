//! Game session: constraint state plus a lazily refreshed candidate set

use super::constraints::{Constraints, PositionalPattern};
use super::{FrequencyIndex, GameError};
use crate::core::{Dictionary, FeedbackEncoding, FeedbackError, Mark, UsageTable, Word};
use colored::Colorize;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt::Display;

/// Rank key base for words with no known usage count
///
/// Offset by the word's score so unknown words still order among themselves.
pub const UNKNOWN_USAGE_SENTINEL: i64 = -1_000_000_000_000;

/// Outcome of applying feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation<'a> {
    /// Best-scoring remaining candidate
    Guess(&'a Word),
    /// No word is consistent with the constraints
    Exhausted,
}

impl<'a> Recommendation<'a> {
    #[must_use]
    pub const fn word(self) -> Option<&'a Word> {
        match self {
            Self::Guess(word) => Some(word),
            Self::Exhausted => None,
        }
    }
}

impl<'a> From<Option<&'a Word>> for Recommendation<'a> {
    fn from(word: Option<&'a Word>) -> Self {
        word.map_or(Self::Exhausted, Self::Guess)
    }
}

/// One puzzle session
///
/// Borrows the dictionary, frequency index and optional usage table; owns
/// the constraints and the candidate cache. Every constraint change marks
/// the cache stale, and the next read through [`Game::candidates`] (or any
/// ranking method) recomputes it once from the full dictionary.
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    index: &'a FrequencyIndex,
    usage: Option<&'a UsageTable>,
    constraints: Constraints,
    removed: FxHashSet<&'a str>,
    candidates: Vec<&'a Word>,
    stale: bool,
    debug: bool,
}

impl<'a> Game<'a> {
    /// Start a fresh game over `dictionary`
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{Dictionary, FeedbackEncoding, Word};
    /// use wordle_constraints::solver::{FrequencyIndex, Game, Recommendation};
    ///
    /// let words = ["arose", "tilde", "mince", "wince"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words, 5).unwrap();
    /// let index = FrequencyIndex::build(&dictionary);
    /// let mut game = Game::new(&dictionary, &index, None);
    ///
    /// let next = game.apply_feedback("arose", "____E", FeedbackEncoding::Case).unwrap();
    /// assert_eq!(next.word().map(|w| w.text()), Some("mince"));
    /// assert_eq!(game.candidate_count(), 3);
    /// ```
    #[must_use]
    pub fn new(
        dictionary: &'a Dictionary,
        index: &'a FrequencyIndex,
        usage: Option<&'a UsageTable>,
    ) -> Self {
        Self {
            dictionary,
            index,
            usage,
            constraints: Constraints::new(dictionary.word_length()),
            removed: FxHashSet::default(),
            candidates: dictionary.words().iter().collect(),
            stale: false,
            debug: false,
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn index(&self) -> &'a FrequencyIndex {
        self.index
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Confirmed letter per position
    #[must_use]
    pub fn confirmed(&self) -> &[Option<u8>] {
        self.constraints.confirmed()
    }

    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Toggle diagnostics on stderr; never changes results
    pub const fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// True when the next candidate read will recompute
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    /// The positional pattern the next recompute will apply
    #[must_use]
    pub fn pattern(&self) -> PositionalPattern {
        self.constraints.pattern()
    }

    /// Record that `position` is exactly `letter`
    ///
    /// # Errors
    /// Returns `GameError::Conflict` if another letter is already confirmed
    /// there; nothing changes in that case.
    pub fn confirm(&mut self, letter: u8, position: usize) -> Result<(), GameError> {
        if self.constraints.confirm(letter, position)? {
            self.stale = true;
        }
        Ok(())
    }

    /// Record that `letter` is absent from the answer
    ///
    /// # Errors
    /// Returns `GameError::Validation` if `letter` is not an ASCII letter.
    pub fn eliminate(&mut self, letter: u8) -> Result<(), GameError> {
        if self.constraints.eliminate(letter)? {
            self.stale = true;
        }
        Ok(())
    }

    /// Record that `letter` is in the answer, but not at `position`
    ///
    /// # Errors
    /// Returns `GameError::Validation` for a non-letter or out-of-range
    /// position.
    pub fn mark_present_elsewhere(&mut self, letter: u8, position: usize) -> Result<(), GameError> {
        if self.constraints.mark_present_elsewhere(letter, position)? {
            self.stale = true;
        }
        Ok(())
    }

    /// Apply the feedback row for `guess` and recommend the next guess
    ///
    /// Confirmed marks confirm the letter, present marks record it as
    /// present elsewhere, absent marks eliminate it everywhere. The row is
    /// applied atomically: on any error no constraint changes.
    ///
    /// # Errors
    /// - `GameError::Validation` if the guess is not a word of the game's
    ///   length or the feedback cannot be decoded
    /// - `GameError::Conflict` if a confirmed mark contradicts an earlier one
    /// - `GameError::MissingKey` if ranking hits a letter the index lacks
    pub fn apply_feedback(
        &mut self,
        guess: &str,
        feedback: &str,
        encoding: FeedbackEncoding,
    ) -> Result<Recommendation<'a>, GameError> {
        let length = self.word_length();
        let guess = Word::new(guess)
            .ok()
            .filter(|word| word.len() == length)
            .ok_or_else(|| FeedbackError::InvalidGuess {
                guess: guess.to_string(),
                expected: length,
            })?;
        let marks = encoding.decode(feedback, length)?;

        let mut next = self.constraints.clone();
        let mut changed = false;
        for (position, (&letter, mark)) in guess.chars().iter().zip(&marks).enumerate() {
            changed |= match *mark {
                Mark::Confirmed => next.confirm(letter, position)?,
                Mark::PresentElsewhere => next.mark_present_elsewhere(letter, position)?,
                Mark::Absent => next.eliminate(letter)?,
            };
        }

        if changed {
            self.constraints = next;
            self.stale = true;
        }
        self.diagnostic(format_args!(
            "applied {guess} {}",
            encoding.encode(&guess, &marks)
        ));

        Ok(self.best_candidate()?.into())
    }

    /// Current candidates, in dictionary order
    ///
    /// Recomputes first if the constraints changed since the last read.
    pub fn candidates(&mut self) -> &[&'a Word] {
        self.refresh();
        &self.candidates
    }

    pub fn candidate_count(&mut self) -> usize {
        self.candidates().len()
    }

    /// Derive the candidate set from the dictionary and constraints
    ///
    /// Pure: does not touch the cache. A word survives when it matches the
    /// positional pattern, contains every letter marked present elsewhere,
    /// and was not explicitly removed.
    #[must_use]
    pub fn recompute(&self) -> Vec<&'a Word> {
        let pattern = self.constraints.pattern();
        self.diagnostic(format_args!("candidate pattern is {pattern}"));

        let mut matched: Vec<&'a Word> = self
            .dictionary
            .words()
            .iter()
            .filter(|word| !self.removed.contains(word.text()) && pattern.matches(word))
            .collect();

        let required = self.constraints.required_letters();
        if !required.is_empty() {
            let before = matched.len();
            matched.retain(|word| word.letters().is_superset(required));
            let dropped = before - matched.len();
            if dropped == 0 {
                self.diagnostic("no words eliminated by present letters");
            } else {
                self.diagnostic(format_args!(
                    "{dropped} of {before} words eliminated by present letters [{required}]"
                ));
            }
        }

        matched
    }

    fn refresh(&mut self) {
        if self.stale {
            self.candidates = self.recompute();
            self.stale = false;
        }
    }

    /// Highest-scoring candidate, first one wins ties
    ///
    /// Returns `Ok(None)` when no candidates remain.
    ///
    /// # Errors
    /// Returns `GameError::MissingKey` if a candidate has a letter the
    /// frequency index lacks.
    pub fn best_candidate(&mut self) -> Result<Option<&'a Word>, GameError> {
        self.refresh();
        let mut best: Option<(&'a Word, u64)> = None;
        for &word in &self.candidates {
            let score = self.index.score(word)?;
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }
        Ok(best.map(|(word, _)| word))
    }

    /// All candidates with scores, highest first, ties in candidate order
    ///
    /// # Errors
    /// Returns `GameError::MissingKey` as [`Game::best_candidate`] does.
    pub fn best_candidates(&mut self) -> Result<Vec<(&'a Word, u64)>, GameError> {
        self.refresh();
        let index = self.index;
        let mut scored: Vec<(&'a Word, u64)> = self
            .candidates
            .par_iter()
            .map(|&word| index.score(word).map(|score| (word, score)))
            .collect::<Result<_, _>>()?;
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(scored)
    }

    /// Endgame ranking: known usage counts first, then the rest by score
    ///
    /// Each word's rank key is its usage count when the usage table knows
    /// it, otherwise [`UNKNOWN_USAGE_SENTINEL`] plus its score.
    ///
    /// # Errors
    /// Returns `GameError::MissingKey` as [`Game::best_candidate`] does.
    pub fn best_candidates_to_finish(&mut self) -> Result<Vec<(&'a Word, i64)>, GameError> {
        let usage = self.usage;
        let mut ranked: Vec<(&'a Word, i64)> = self
            .best_candidates()?
            .into_iter()
            .map(|(word, score)| {
                let key = usage.and_then(|table| table.get(word.text())).map_or_else(
                    || UNKNOWN_USAGE_SENTINEL.saturating_add(i64::try_from(score).unwrap_or(i64::MAX)),
                    |count| i64::try_from(count).unwrap_or(i64::MAX),
                );
                (word, key)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(ranked)
    }

    /// Permanently exclude a current candidate
    ///
    /// Used when the puzzle rejects a recommended guess as not a word. The
    /// exclusion survives every later recompute.
    ///
    /// # Errors
    /// Returns `GameError::NotACandidate` if `word` is not a current
    /// candidate; the candidate set is unchanged.
    pub fn remove_candidate(&mut self, word: &str) -> Result<(), GameError> {
        self.refresh();
        let text = word.to_lowercase();
        let position = self
            .candidates
            .iter()
            .position(|candidate| candidate.text() == text)
            .ok_or_else(|| GameError::NotACandidate(word.to_string()))?;

        let removed = self.candidates.remove(position);
        self.removed.insert(removed.text());
        self.diagnostic(format_args!("removed {removed} from candidates"));
        Ok(())
    }

    /// Number of words explicitly removed so far
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    fn diagnostic(&self, message: impl Display) {
        if self.debug {
            eprintln!("{}", format!("[debug] {message}").dimmed());
        }
    }
}
