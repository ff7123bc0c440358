//! Display functions for command results

use super::formatters::{create_progress_bar, score_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{Word, to_emoji};
use colored::Colorize;
use std::fmt::Display;

/// Print a titled list of words with their scores, one per line
pub fn print_ranked<K: Display>(title: &str, entries: &[(&Word, K)]) {
    println!("{}", title.cyan());
    for (word, score) in entries {
        println!("  {:<10} {score}", word.text().to_uppercase());
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            to_emoji(&step.marks)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {}", step.score);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else if result.exhausted {
        println!(
            "{}",
            format!(
                "❌ No candidates left after {} guesses",
                result.guesses.len()
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} dictionary words:", result.dictionary_size);
    for &(letter, count) in &result.letters {
        let bar = create_progress_bar(f64::from(count), result.dictionary_size as f64, 30);
        println!("   {letter}  [{}] {count}", bar.green());
    }

    println!(
        "\n   Score:  [{}] {}",
        score_bar(result.score, result.best_score, 30).green(),
        format!("{} / {}", result.score, result.best_score).bright_yellow()
    );
    match result.rank {
        Some(rank) => println!("   Rank:   {rank} of {}", result.dictionary_size),
        None => println!("   Rank:   {}", "not in word list".bright_black()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Unsolved:".red().bold());
        for word in &result.failures {
            println!("   {}", word.to_uppercase());
        }
    }
}
