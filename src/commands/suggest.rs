//! Suggest command
//!
//! One-shot solve from `GUESS:FEEDBACK` arguments, keeping the per-guess
//! candidate counts for display.

use crate::error::{SolverError, SolverResult};
use crate::solver::{
    HistoryEntry, Solution, Solver, SolverConfig, initial_candidates, narrowing_trail,
};
use crate::wordlists::DictionaryLoader;

/// Result of a suggest run
pub struct SuggestResult {
    pub config: SolverConfig,
    pub history: Vec<HistoryEntry>,
    pub solution: Solution,
    /// Candidate counts before any feedback and after each guess
    pub trail: Vec<usize>,
}

/// Parse a `GUESS:FEEDBACK` argument such as `crane:bbgbg`
///
/// # Errors
/// Returns `InvalidArgument` if the separator is missing or either half is invalid.
pub fn parse_history_arg(arg: &str, word_length: usize) -> SolverResult<HistoryEntry> {
    let (guess, feedback) = arg.split_once(':').ok_or_else(|| {
        SolverError::invalid(format!("Expected GUESS:FEEDBACK, got '{arg}'"))
    })?;
    HistoryEntry::parse(guess, feedback, word_length)
}

/// Solve for the given history arguments
///
/// # Errors
/// Returns any validation or dictionary error from the solve.
pub fn run_suggest<L: DictionaryLoader>(
    solver: &Solver<'_, L>,
    config: SolverConfig,
    args: &[String],
) -> SolverResult<SuggestResult> {
    let history = args
        .iter()
        .map(|arg| parse_history_arg(arg, config.word_length()))
        .collect::<SolverResult<Vec<_>>>()?;

    let solution = solver.solve(&config, &history)?;

    let dictionary = solver.dictionary(&config)?;
    let trail = narrowing_trail(
        initial_candidates(&dictionary, &config),
        &history,
        config.prefix(),
    );

    Ok(SuggestResult {
        config,
        history,
        solution,
        trail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverSettings;
    use crate::wordlists::{DictionaryCache, MemoryLoader};

    fn cache() -> DictionaryCache<MemoryLoader> {
        DictionaryCache::new(MemoryLoader::new().with_dictionary(
            "english",
            ["crane", "slate", "plier", "zonal", "crate", "grate"],
        ))
    }

    #[test]
    fn parse_arg() {
        let entry = parse_history_arg("crane:bbgbg", 5).unwrap();
        assert_eq!(entry.guess().text(), "crane");
        assert_eq!(entry.pattern().to_string(), "bbgbg");

        assert!(parse_history_arg("crane", 5).is_err());
        assert!(parse_history_arg("crane:bbg", 5).is_err());
        assert!(parse_history_arg("crane:bbgbz", 5).is_err());
    }

    #[test]
    fn suggest_tracks_trail() {
        let cache = cache();
        let solver = Solver::new(&cache, SolverSettings::default());
        let config = SolverConfig::new(5, None, "english").unwrap();

        let result = run_suggest(&solver, config, &["crane:bbgbg".to_string()]).unwrap();

        assert_eq!(result.solution.remaining_words, vec!["slate"]);
        assert_eq!(result.trail, vec![6, 1]);
        assert_eq!(result.history.len(), 1);
    }

    #[test]
    fn bad_argument_is_invalid() {
        let cache = cache();
        let solver = Solver::new(&cache, SolverSettings::default());
        let config = SolverConfig::new(5, None, "english").unwrap();

        let err = run_suggest(&solver, config, &["crane-bbgbg".to_string()]).err().unwrap();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }
}
