//! Wordle Constraints - CLI
//!
//! Interactive Wordle assistant with solve, analyze and benchmark modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_constraints::{
    commands::{
        SolveConfig, Session, analyze_word, run_benchmark, run_simple, sample_targets, solve_word,
    },
    core::{Dictionary, FeedbackEncoding, UsageTable, Word},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::FrequencyIndex,
    wordlists::{
        WORDS,
        loader::{load_from_file, load_usage_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_constraints",
    about = "Wordle assistant that tracks feedback constraints and ranks candidates by letter coverage",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a CSV file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Optional `word,count` CSV used to rank candidates with `finish`
    #[arg(short, long, global = true)]
    usage: Option<String>,

    /// Word length
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Feedback encoding: colors (default) or case
    #[arg(short, long, global = true, default_value = "colors")]
    encoding: String,

    /// Print diagnostics for every constraint update and recomputation
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive command loop (default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the letter-coverage score of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for picking target words
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -w and -l flags
///
/// - "all": the embedded five-letter list
/// - "<path>": first column of a CSV file, filtered to the word length
fn load_dictionary(wordlist_mode: &str, length: usize) -> Result<Dictionary> {
    let words: Vec<Word> = match wordlist_mode {
        "all" => {
            if length != 5 {
                bail!("the embedded word list only has 5-letter words; pass --wordlist <path>");
            }
            words_from_slice(WORDS, length)
        }
        path => load_from_file(path, length)
            .with_context(|| format!("failed to read word list '{path}'"))?,
    };

    let dictionary = Dictionary::new(words, length).context("failed to build dictionary")?;
    if dictionary.is_empty() {
        bail!("word list '{wordlist_mode}' has no {length}-letter words");
    }
    Ok(dictionary)
}

fn load_usage(path: Option<&str>) -> Result<Option<UsageTable>> {
    path.map(|path| {
        load_usage_from_file(path).with_context(|| format!("failed to read usage table '{path}'"))
    })
    .transpose()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let encoding = FeedbackEncoding::from_name(&cli.encoding)
        .with_context(|| format!("unknown encoding '{}' (expected colors or case)", cli.encoding))?;
    let dictionary = load_dictionary(&cli.wordlist, cli.length)?;
    let usage = load_usage(cli.usage.as_deref())?;
    let index = FrequencyIndex::build(&dictionary);

    // Default to the interactive loop if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => {
            let mut session = Session::new(&dictionary, &index, usage.as_ref(), encoding);
            session.set_debug(cli.debug);
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { word, verbose } => {
            let mut config = SolveConfig::new(word);
            config.debug = cli.debug;
            let result = solve_word(config, &dictionary, &index, usage.as_ref())
                .map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary, &index).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words...");
            let targets = sample_targets(&dictionary, count, seed);
            let result = run_benchmark(&dictionary, &index, usage.as_ref(), &targets, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
