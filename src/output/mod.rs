//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_config, print_frequency_report,
    print_history, print_solution, print_suggest_result, print_win,
};
