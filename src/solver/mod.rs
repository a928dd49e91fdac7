//! Candidate narrowing and ranking
//!
//! The engine folds a guess history over a dictionary, the scorer ranks what
//! is left, and the variable-position analysis suggests filler words.

mod engine;
pub mod request;
pub mod scorer;
pub mod variable;

pub use engine::{
    HistoryEntry, Solution, Solver, SolverConfig, fold_history, initial_candidates, narrow,
    narrowing_trail,
};
pub use request::{Reply, SolveRequest, SolveResponse, handle_request, solve_json};
pub use scorer::{LetterFrequency, Recommendation, letter_frequency_percent, recommend, score};
pub use variable::{LetterSet, VariablePositions, filler_suggestions, find_words_with_letters};
