//! Letter frequency command

use crate::error::SolverResult;
use crate::solver::{Solver, SolverConfig, initial_candidates, letter_frequency_percent};
use crate::wordlists::DictionaryLoader;

/// Letter share over the filtered dictionary
pub struct FrequencyReport {
    pub word_count: usize,
    pub prefix: Option<u8>,
    /// Letters with their percentage share, most frequent first
    pub letters: Vec<(u8, f64)>,
}

/// Compute the letter frequency table for `config`
///
/// # Errors
/// Returns `DictionaryNotFound` if the dictionary cannot be loaded.
pub fn letter_frequencies<L: DictionaryLoader>(
    solver: &Solver<'_, L>,
    config: &SolverConfig,
) -> SolverResult<FrequencyReport> {
    let dictionary = solver.dictionary(config)?;
    let words = initial_candidates(&dictionary, config);

    Ok(FrequencyReport {
        word_count: words.len(),
        prefix: config.prefix(),
        letters: letter_frequency_percent(&words, config.prefix()),
    })
}
