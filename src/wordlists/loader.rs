//! Word list loading utilities
//!
//! Provides functions to load word lists and usage tables from files or
//! embedded constants. Files are read as loose CSV: one record per line,
//! word in the first column.

use crate::core::{UsageTable, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load `length`-letter words from a file
///
/// Keeps the first comma-separated field of each line when it is exactly
/// `length` ASCII letters; header rows and other lengths are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_constraints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.csv", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content, length))
}

/// Load a `word,count` usage table from a file
///
/// Rows whose second field is not an unsigned integer (headers, bare words)
/// are skipped. A later row for the same word replaces an earlier one.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_usage_from_file<P: AsRef<Path>>(path: P) -> io::Result<UsageTable> {
    let content = fs::read_to_string(path)?;
    Ok(parse_usage_table(&content))
}

/// Parse word list text, see [`load_from_file`]
#[must_use]
pub fn parse_word_list(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| first_field(line))
        .filter_map(|field| word_of_length(field, length))
        .collect()
}

/// Parse usage table text, see [`load_usage_from_file`]
#[must_use]
pub fn parse_usage_table(content: &str) -> UsageTable {
    content
        .lines()
        .filter_map(|line| {
            let mut fields = line.split(',').map(str::trim);
            let word = fields.next().filter(|w| !w.is_empty())?;
            let count = fields.next()?.parse::<u64>().ok()?;
            Some((word, count))
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_constraints::wordlists::loader::words_from_slice;
/// use wordle_constraints::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| word_of_length(s, length))
        .collect()
}

fn first_field(line: &str) -> Option<&str> {
    line.split(',').next().map(str::trim).filter(|f| !f.is_empty())
}

fn word_of_length(text: &str, length: usize) -> Option<Word> {
    Word::new(text).ok().filter(|word| word.len() == length)
}
