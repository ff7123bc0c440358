//! Benchmark command
//!
//! Tests solver performance across multiple target words.

use super::solve::{SolveConfig, solve_word};
use crate::core::{Dictionary, UsageTable, Word};
use crate::solver::FrequencyIndex;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failures: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the dictionary
///
/// The same `seed` always yields the same targets.
#[must_use]
pub fn sample_targets(dictionary: &Dictionary, count: usize, seed: Option<u64>) -> Vec<&Word> {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    dictionary
        .words()
        .choose_multiple(&mut rng, count)
        .collect()
}

/// Run benchmark on a set of target words
///
/// Guess counts and the distribution cover solved words only; unsolved
/// targets are listed in `failures`.
pub fn run_benchmark(
    dictionary: &Dictionary,
    index: &FrequencyIndex,
    usage: Option<&UsageTable>,
    targets: &[&Word],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for (done, target) in targets.iter().enumerate() {
        let config = SolveConfig::new(target.text().to_string());
        match solve_word(config, dictionary, index, usage) {
            Ok(result) if result.success => {
                let guesses = result.guesses.len();
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            _ => failures.push(target.text().to_string()),
        }

        let solved = done + 1 - failures.len();
        if solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failures.len();

    BenchmarkResult {
        total_words,
        solved,
        failures,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn embedded() -> (Dictionary, FrequencyIndex) {
        let dictionary = Dictionary::new(words_from_slice(WORDS, 5), 5).unwrap();
        let index = FrequencyIndex::build(&dictionary);
        (dictionary, index)
    }

    #[test]
    fn benchmark_runs() {
        let (dictionary, index) = embedded();
        let targets = sample_targets(&dictionary, 10, Some(7));
        let result = run_benchmark(&dictionary, &index, None, &targets, false);

        assert_eq!(result.total_words, 10);
        // every embedded word is solvable within six guesses
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_whole_dictionary() {
        let (dictionary, index) = embedded();
        let targets: Vec<&Word> = dictionary.words().iter().collect();
        let result = run_benchmark(&dictionary, &index, None, &targets, false);

        assert_eq!(result.solved, dictionary.len());
        assert!(result.failures.is_empty());
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.max_guesses, 6);
        assert_eq!(result.distribution.get(&3), Some(&265));
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let (dictionary, index) = embedded();
        let targets = sample_targets(&dictionary, 10, Some(11));
        let result = run_benchmark(&dictionary, &index, None, &targets, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn sample_targets_is_reproducible() {
        let (dictionary, _) = embedded();
        let first = sample_targets(&dictionary, 5, Some(42));
        let second = sample_targets(&dictionary, 5, Some(42));
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);

        let all = sample_targets(&dictionary, dictionary.len() + 10, Some(1));
        assert_eq!(all.len(), dictionary.len());
    }

    #[test]
    fn benchmark_empty_target_list() {
        let (dictionary, index) = embedded();
        let result = run_benchmark(&dictionary, &index, None, &[], false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }
}
