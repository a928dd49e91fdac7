//! Wordle Assist
//!
//! A stateless word-guessing assistant: given the guesses played so far and
//! the colored feedback each received, it narrows a dictionary to the words
//! still possible, ranks them by letter frequency, and suggests filler words
//! that test the letters still in doubt.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::config::SolverSettings;
//! use wordle_assist::solver::{HistoryEntry, Solver, SolverConfig};
//! use wordle_assist::wordlists::{DictionaryCache, EmbeddedLoader};
//!
//! let cache = DictionaryCache::new(EmbeddedLoader);
//! let solver = Solver::new(&cache, SolverSettings::default());
//!
//! let config = SolverConfig::new(5, None, "english").unwrap();
//! let history = vec![HistoryEntry::parse("crane", "bbgbg", 5).unwrap()];
//!
//! let solution = solver.solve(&config, &history).unwrap();
//! assert!(solution.remaining_words.iter().any(|w| w == "slate"));
//! ```

// Core domain types
pub mod core;

// Narrowing, scoring and the request contract
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;
