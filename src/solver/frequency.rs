//! Substring frequency index
//!
//! Maps every contiguous substring of every dictionary word to the number of
//! words containing it. The baseline scorer only consults single letters;
//! longer keys are kept for callers that want finer-grained lookups.

use super::GameError;
use crate::core::{Dictionary, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Substring → number of dictionary words containing it at least once
#[derive(Debug, Clone, Default)]
pub struct FrequencyIndex {
    counts: FxHashMap<String, u32>,
}

impl FrequencyIndex {
    /// Build the index for a dictionary
    ///
    /// Each word contributes at most once per distinct substring, wherever
    /// that substring occurs in it.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{Dictionary, Word};
    /// use wordle_constraints::solver::FrequencyIndex;
    ///
    /// let words = ["mince", "wince", "since"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words, 5).unwrap();
    /// let index = FrequencyIndex::build(&dictionary);
    ///
    /// assert_eq!(index.count("ince"), Some(3));
    /// assert_eq!(index.count("m"), Some(1));
    /// assert_eq!(index.count("z"), None);
    /// ```
    #[must_use]
    pub fn build(dictionary: &Dictionary) -> Self {
        let counts = dictionary
            .words()
            .par_iter()
            .fold(FxHashMap::default, |mut acc: FxHashMap<String, u32>, word| {
                for substring in distinct_substrings(word) {
                    *acc.entry(substring.to_string()).or_insert(0) += 1;
                }
                acc
            })
            .reduce(FxHashMap::default, |mut left, right| {
                for (key, count) in right {
                    *left.entry(key).or_insert(0) += count;
                }
                left
            });

        Self { counts }
    }

    /// Number of dictionary words containing `substring`, if any do
    #[must_use]
    pub fn count(&self, substring: &str) -> Option<u32> {
        self.counts.get(substring).copied()
    }

    /// Number of distinct substrings indexed
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Letter-coverage score of a word
    ///
    /// Sums the single-letter counts over the word's distinct letters, so a
    /// repeated letter contributes once.
    ///
    /// # Errors
    /// Returns `GameError::MissingKey` if a letter of `word` never occurs in
    /// the indexed dictionary.
    pub fn score(&self, word: &Word) -> Result<u64, GameError> {
        word.letters().iter().try_fold(0u64, |total, letter| {
            let letter = char::from(letter);
            let mut buf = [0u8; 4];
            self.count(letter.encode_utf8(&mut buf))
                .map(|count| total + u64::from(count))
                .ok_or(GameError::MissingKey(letter))
        })
    }
}

/// Every distinct contiguous substring of `word`, lengths 1 through `len`
fn distinct_substrings(word: &Word) -> FxHashSet<&str> {
    let text = word.text();
    let len = text.len();
    (0..len)
        .flat_map(|start| (start + 1..=len).map(move |end| &text[start..end]))
        .collect()
}
