//! Fixed-length word collections
//!
//! A [`Dictionary`] is the immutable universe of candidate words for one
//! game, and a [`UsageTable`] carries optional real-world popularity counts.

use super::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    ZeroLength,
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Word length must be at least 1"),
            Self::LengthMismatch {
                word,
                expected,
                actual,
            } => write!(
                f,
                "Word '{word}' has {actual} letters, dictionary requires {expected}"
            ),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Unique words of a single length, in first-seen order
///
/// Iteration order is stable and drives every tie-break in scoring.
#[derive(Debug, Clone)]
pub struct Dictionary {
    length: usize,
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary of `length`-letter words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `DictionaryError` if `length` is zero or any word has a
    /// different length.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{Dictionary, Word};
    ///
    /// let words = ["mince", "wince", "mince"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words, 5).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn new(
        words: impl IntoIterator<Item = Word>,
        length: usize,
    ) -> Result<Self, DictionaryError> {
        if length == 0 {
            return Err(DictionaryError::ZeroLength);
        }

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut unique = Vec::new();

        for word in words {
            if word.len() != length {
                return Err(DictionaryError::LengthMismatch {
                    word: word.text().to_string(),
                    expected: length,
                    actual: word.len(),
                });
            }
            if seen.insert(word.text().to_string()) {
                unique.push(word);
            }
        }

        Ok(Self {
            length,
            words: unique,
        })
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }
}

/// Real-world usage counts keyed by word text
#[derive(Debug, Clone, Default)]
pub struct UsageTable {
    counts: FxHashMap<String, u64>,
}

impl UsageTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a count, replacing any previous value for the word
    pub fn insert(&mut self, word: impl Into<String>, count: u64) {
        self.counts.insert(word.into().to_lowercase(), count);
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for UsageTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, count) in iter {
            table.insert(word, count);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn dictionary_keeps_first_seen_order() {
        let dictionary = Dictionary::new(words(&["since", "mince", "since", "wince"]), 5).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["since", "mince", "wince"]);
    }

    #[test]
    fn dictionary_rejects_length_mismatch() {
        let err = Dictionary::new(words(&["mince", "ox"]), 5).unwrap_err();
        assert_eq!(
            err,
            DictionaryError::LengthMismatch {
                word: "ox".to_string(),
                expected: 5,
                actual: 2,
            }
        );
    }

    #[test]
    fn dictionary_rejects_zero_length() {
        assert_eq!(
            Dictionary::new(Vec::new(), 0).unwrap_err(),
            DictionaryError::ZeroLength
        );
    }

    #[test]
    fn dictionary_find() {
        let dictionary = Dictionary::new(words(&["mince", "wince"]), 5).unwrap();
        assert!(dictionary.find("wince").is_some());
        assert!(dictionary.find("since").is_none());
    }

    #[test]
    fn usage_table_overwrites() {
        let table: UsageTable = [("Wince", 3), ("wince", 7)].into_iter().collect();
        assert_eq!(table.get("wince"), Some(7));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("mince"), None);
    }
}
