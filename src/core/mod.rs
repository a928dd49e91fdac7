//! Core domain types for word guessing
//!
//! Words, feedback patterns and the candidate filter. Everything here is pure
//! and deterministic; the solver layers scoring and orchestration on top.

mod filter;
mod pattern;
mod word;

pub use filter::{filter_candidates, is_consistent};
pub use pattern::{Feedback, Pattern, PatternError};
pub use word::{ALPHABET_SIZE, LetterProfile, Word, WordError, letter_index};
