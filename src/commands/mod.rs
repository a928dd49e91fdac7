//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod frequency;
pub mod request;
pub mod simple;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, GameOutcome, MAX_GUESSES, pick_targets, play_game, run_benchmark};
pub use frequency::{FrequencyReport, letter_frequencies};
pub use request::{read_request, run_request};
pub use simple::{Session, run_simple};
pub use suggest::{SuggestResult, parse_history_arg, run_suggest};
