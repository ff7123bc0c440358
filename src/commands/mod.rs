//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use simple::{CommandResult, Session, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
