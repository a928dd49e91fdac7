//! Solve orchestration
//!
//! Validate, load the dictionary, filter by length and prefix, fold the guess
//! history in order, then score and analyze whatever remains.

use super::scorer::{Recommendation, recommend};
use super::variable::{VariablePositions, filler_suggestions};
use crate::config::SolverSettings;
use crate::core::{Feedback, Pattern, Word, filter_candidates};
use crate::error::{SolverError, SolverResult};
use crate::wordlists::{Dictionary, DictionaryCache, DictionaryLoader};
use std::sync::Arc;
use tracing::{debug, warn};

/// Validated solve configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    word_length: usize,
    prefix: Option<u8>,
    dictionary_id: String,
}

impl SolverConfig {
    /// Validate and build a configuration
    ///
    /// An empty prefix means no prefix. The prefix is lowercased.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `word_length` is not positive or the prefix
    /// is not a single letter.
    pub fn new(
        word_length: i64,
        prefix: Option<&str>,
        dictionary_id: impl Into<String>,
    ) -> SolverResult<Self> {
        let word_length = usize::try_from(word_length)
            .ok()
            .filter(|&len| len > 0)
            .ok_or_else(|| SolverError::invalid(format!("Invalid wordLength: {word_length}")))?;

        let prefix = match prefix.map(str::trim) {
            None | Some("") => None,
            Some(p) => {
                let mut chars = p.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase() as u8),
                    _ => {
                        return Err(SolverError::invalid(format!(
                            "Invalid prefix '{p}': must be a single letter"
                        )));
                    }
                }
            }
        };

        let dictionary_id = dictionary_id.into();
        if dictionary_id.trim().is_empty() {
            return Err(SolverError::invalid("Dictionary name must not be empty"));
        }

        Ok(Self {
            word_length,
            prefix,
            dictionary_id,
        })
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn prefix(&self) -> Option<u8> {
        self.prefix
    }

    #[must_use]
    pub fn dictionary_id(&self) -> &str {
        &self.dictionary_id
    }
}

/// One played guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    guess: Word,
    pattern: Pattern,
}

impl HistoryEntry {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Parse a guess and its `b`/`y`/`g` feedback, both `word_length` long
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a malformed guess, unknown feedback
    /// symbols, or a length mismatch.
    pub fn parse(guess: &str, feedback: &str, word_length: usize) -> SolverResult<Self> {
        let guess = Word::new(guess.trim())
            .map_err(|e| SolverError::invalid(format!("Invalid guess '{guess}': {e}")))?;
        let pattern = Pattern::parse(feedback.trim())
            .map_err(|e| SolverError::invalid(format!("Invalid feedback '{feedback}': {e}")))?;

        let entry = Self::new(guess, pattern);
        entry.validate(word_length)?;
        Ok(entry)
    }

    /// Like [`HistoryEntry::parse`], but feedback must be lowercase `b`/`y`/`g`
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a malformed guess, any other feedback
    /// symbol, or a length mismatch.
    pub fn parse_wire(guess: &str, feedback: &str, word_length: usize) -> SolverResult<Self> {
        Pattern::parse_wire(feedback)
            .map_err(|e| SolverError::invalid(format!("Invalid feedback '{feedback}': {e}")))?;
        Self::parse(guess, feedback, word_length)
    }

    /// Check that guess and feedback both have `word_length` letters
    ///
    /// # Errors
    /// Returns `InvalidArgument` describing the mismatch.
    pub fn validate(&self, word_length: usize) -> SolverResult<()> {
        if self.guess.len() != word_length || self.pattern.len() != word_length {
            return Err(SolverError::invalid(format!(
                "Guess and feedback length mismatch: guess '{}' ({}), feedback '{}' ({}), expected {}",
                self.guess,
                self.guess.len(),
                self.pattern,
                self.pattern.len(),
                word_length
            )));
        }
        Ok(())
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Feedback as the filter sees it
    ///
    /// In prefix mode a guess starting with the prefix letter is green at
    /// position 0 regardless of what was reported.
    #[must_use]
    pub fn effective_pattern(&self, prefix: Option<u8>) -> Pattern {
        match prefix {
            Some(p) if self.guess.starts_with(p) => {
                self.pattern.clone().with_mark(0, Feedback::Green)
            }
            _ => self.pattern.clone(),
        }
    }
}

/// Everything a solve produces
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub recommendations: Vec<Recommendation>,
    pub remaining_words: Vec<String>,
    pub remaining_count: usize,
    pub variable_positions: VariablePositions,
    pub filler_suggestions: Vec<String>,
    pub guess_count: usize,
}

impl Solution {
    /// True when the feedback ruled out every word
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_count == 0
    }
}

/// Length- and prefix-filtered starting candidates
#[must_use]
pub fn initial_candidates<'d>(dictionary: &'d Dictionary, config: &SolverConfig) -> Vec<&'d Word> {
    dictionary.select(config.word_length(), config.prefix())
}

/// Apply one history entry to the current candidates
#[must_use]
pub fn narrow<'d>(candidates: &[&'d Word], entry: &HistoryEntry, prefix: Option<u8>) -> Vec<&'d Word> {
    filter_candidates(candidates, entry.guess(), &entry.effective_pattern(prefix))
}

/// Fold the history over `initial`, in order
///
/// Each step narrows the previous step's result, never the full dictionary.
#[must_use]
pub fn fold_history<'d>(
    initial: Vec<&'d Word>,
    history: &[HistoryEntry],
    prefix: Option<u8>,
) -> Vec<&'d Word> {
    history
        .iter()
        .enumerate()
        .fold(initial, |candidates, (step, entry)| {
            let narrowed = narrow(&candidates, entry, prefix);
            debug!(
                step = step + 1,
                guess = %entry.guess(),
                feedback = %entry.pattern(),
                before = candidates.len(),
                after = narrowed.len(),
                "applied feedback"
            );
            narrowed
        })
}

/// Candidate counts before any feedback and after each history entry
#[must_use]
pub fn narrowing_trail(initial: Vec<&Word>, history: &[HistoryEntry], prefix: Option<u8>) -> Vec<usize> {
    let mut trail = Vec::with_capacity(history.len() + 1);
    let mut candidates = initial;
    trail.push(candidates.len());
    for entry in history {
        candidates = narrow(&candidates, entry, prefix);
        trail.push(candidates.len());
    }
    trail
}

/// Stateless solver over a shared dictionary cache
pub struct Solver<'c, L> {
    cache: &'c DictionaryCache<L>,
    settings: SolverSettings,
}

impl<'c, L: DictionaryLoader> Solver<'c, L> {
    pub const fn new(cache: &'c DictionaryCache<L>, settings: SolverSettings) -> Self {
        Self { cache, settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// The (cached) dictionary named by `config`
    ///
    /// # Errors
    /// Returns `DictionaryNotFound` if the dictionary cannot be loaded.
    pub fn dictionary(&self, config: &SolverConfig) -> SolverResult<Arc<Dictionary>> {
        self.cache.get_or_load(config.dictionary_id())
    }

    /// Compute candidates, recommendations and filler words for a history
    ///
    /// All input is validated before any filtering. An empty result is not an
    /// error: it means the feedback contradicts every dictionary word.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a history entry does not match the
    /// configured word length, or `DictionaryNotFound` for an unknown dictionary.
    pub fn solve(&self, config: &SolverConfig, history: &[HistoryEntry]) -> SolverResult<Solution> {
        for entry in history {
            entry.validate(config.word_length())?;
        }

        let dictionary = self.dictionary(config)?;
        let initial = initial_candidates(&dictionary, config);
        let candidates = fold_history(initial, history, config.prefix());

        if candidates.is_empty() {
            warn!(
                dictionary = config.dictionary_id(),
                guesses = history.len(),
                "no candidates remain"
            );
        }

        let variable_positions = VariablePositions::analyze(&candidates, config.word_length());

        let filler_suggestions = if candidates.len() > self.settings.filler_min_candidates {
            let pool = dictionary.select(config.word_length(), None);
            filler_suggestions(
                &pool,
                &variable_positions,
                history.iter().map(HistoryEntry::guess),
                self.settings.max_fillers,
            )
            .into_iter()
            .map(|w| w.text().to_string())
            .collect()
        } else {
            Vec::new()
        };

        Ok(Solution {
            recommendations: recommend(&candidates, self.settings.max_recommendations),
            remaining_words: candidates
                .iter()
                .take(self.settings.max_remaining_words)
                .map(|w| w.text().to_string())
                .collect(),
            remaining_count: candidates.len(),
            variable_positions,
            filler_suggestions,
            guess_count: history.len() + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::MemoryLoader;

    fn cache_with(words: &[&str]) -> DictionaryCache<MemoryLoader> {
        DictionaryCache::new(
            MemoryLoader::new().with_dictionary("test", words.iter().map(|w| (*w).to_string())),
        )
    }

    fn config(prefix: Option<&str>) -> SolverConfig {
        SolverConfig::new(5, prefix, "test").unwrap()
    }

    fn entry(guess: &str, feedback: &str) -> HistoryEntry {
        HistoryEntry::parse(guess, feedback, 5).unwrap()
    }

    #[test]
    fn config_validation() {
        assert!(SolverConfig::new(0, None, "test").is_err());
        assert!(SolverConfig::new(-3, None, "test").is_err());
        assert!(SolverConfig::new(5, Some("st"), "test").is_err());
        assert!(SolverConfig::new(5, Some("1"), "test").is_err());
        assert!(SolverConfig::new(5, None, " ").is_err());

        let cfg = SolverConfig::new(5, Some("S"), "test").unwrap();
        assert_eq!(cfg.prefix(), Some(b's'));
        assert_eq!(SolverConfig::new(5, Some(""), "test").unwrap().prefix(), None);
    }

    #[test]
    fn history_entry_validation() {
        assert!(HistoryEntry::parse("crane", "bbbbb", 5).is_ok());
        assert!(HistoryEntry::parse("cranes", "bbbbb", 5).is_err());
        assert!(HistoryEntry::parse("crane", "bbbb", 5).is_err());
        assert!(HistoryEntry::parse("crane", "bbxbb", 5).is_err());
        assert!(HistoryEntry::parse("cr4ne", "bbbbb", 5).is_err());

        let parsed = HistoryEntry::parse("CRANE", "GYBBB", 5).unwrap();
        assert_eq!(parsed.guess().text(), "crane");
        assert_eq!(parsed.pattern().to_string(), "gybbb");
    }

    #[test]
    fn no_history_returns_full_filtered_dictionary() {
        let cache = cache_with(&["crane", "slate", "plier", "zonal", "cranes"]);
        let solver = Solver::new(&cache, SolverSettings::default());

        let solution = solver.solve(&config(None), &[]).unwrap();

        assert_eq!(solution.remaining_words, vec!["crane", "slate", "plier", "zonal"]);
        assert_eq!(solution.remaining_count, 4);
        assert_eq!(solution.recommendations.len(), 4);
        assert_eq!(solution.guess_count, 1);
        assert!(solution.filler_suggestions.is_empty());
    }

    #[test]
    fn history_excludes_guess_and_shared_letters() {
        let cache = cache_with(&["crane", "posit", "zonal", "slate"]);
        let solver = Solver::new(&cache, SolverSettings::default());

        let solution = solver.solve(&config(None), &[entry("crane", "bbbbb")]).unwrap();

        assert_eq!(solution.remaining_words, vec!["posit"]);
        assert_eq!(solution.guess_count, 2);
    }

    #[test]
    fn prefix_restricts_and_forces_first_green() {
        let cache = cache_with(&["slate", "skate", "crane", "spate"]);
        let solver = Solver::new(&cache, SolverSettings::default());
        let cfg = config(Some("s"));

        let solution = solver.solve(&cfg, &[]).unwrap();
        assert_eq!(solution.remaining_words, vec!["slate", "skate", "spate"]);

        // Position 0 reported black is still treated as confirmed green
        let solution = solver.solve(&cfg, &[entry("slate", "bbggg")]).unwrap();
        assert_eq!(solution.remaining_words, vec!["skate", "spate"]);

        // Without prefix mode the same feedback rules out every S word
        let solution = solver.solve(&config(None), &[entry("slate", "bbggg")]).unwrap();
        assert!(solution.is_exhausted());
    }

    #[test]
    fn contradictory_feedback_is_not_an_error() {
        let cache = cache_with(&["crane", "slate", "plier"]);
        let solver = Solver::new(&cache, SolverSettings::default());

        let solution = solver.solve(&config(None), &[entry("zzzzz", "ggggg")]).unwrap();

        assert!(solution.is_exhausted());
        assert!(solution.recommendations.is_empty());
        assert!(solution.filler_suggestions.is_empty());
        assert!(solution.variable_positions.is_empty());
    }

    #[test]
    fn invalid_history_fails_before_loading() {
        let cache = cache_with(&["crane"]);
        let solver = Solver::new(&cache, SolverSettings::default());
        let bad = HistoryEntry::new(Word::new("cranes").unwrap(), Pattern::parse("bbbbbb").unwrap());

        let err = solver.solve(&config(None), &[bad]).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert!(cache.is_empty());
    }

    #[test]
    fn unknown_dictionary() {
        let cache = cache_with(&["crane"]);
        let solver = Solver::new(&cache, SolverSettings::default());
        let cfg = SolverConfig::new(5, None, "missing").unwrap();

        let err = solver.solve(&cfg, &[]).unwrap_err();
        assert!(matches!(err, SolverError::DictionaryNotFound(_)));
    }

    #[test]
    fn caps_apply_but_count_is_true() {
        let words = ["tight", "fight", "night", "light", "sight", "might", "right", "wight"];
        let cache = cache_with(&words);
        let settings = SolverSettings {
            max_recommendations: 2,
            max_remaining_words: 3,
            max_fillers: 1,
            filler_min_candidates: 4,
        };
        let solver = Solver::new(&cache, settings);

        let solution = solver.solve(&config(None), &[]).unwrap();

        assert_eq!(solution.remaining_count, 8);
        assert_eq!(solution.remaining_words.len(), 3);
        assert_eq!(solution.recommendations.len(), 2);
        assert_eq!(solution.filler_suggestions.len(), 1);
    }

    #[test]
    fn fold_never_readmits_excluded_words() {
        let cache = cache_with(&["crane", "crate", "grate", "irate"]);
        let dictionary = cache.get_or_load("test").unwrap();
        let cfg = config(None);

        // On its own the second entry would admit every word; folded, it cannot
        // bring back what the first entry removed
        let history = vec![entry("crane", "gggbg"), entry("zzzzz", "bbbbb")];
        let folded = fold_history(initial_candidates(&dictionary, &cfg), &history, None);
        let texts: Vec<&str> = folded.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["crate"]);

        let alone = fold_history(initial_candidates(&dictionary, &cfg), &history[1..], None);
        assert_eq!(alone.len(), 4);
    }

    #[test]
    fn trail_is_monotonic() {
        let cache = cache_with(&["crane", "crate", "grate", "irate", "slate", "plier"]);
        let dictionary = cache.get_or_load("test").unwrap();
        let cfg = config(None);
        let history = vec![entry("slate", "bbggg"), entry("crane", "bggbg")];

        let trail = narrowing_trail(initial_candidates(&dictionary, &cfg), &history, None);

        assert_eq!(trail.len(), 3);
        assert_eq!(trail[0], 6);
        assert!(trail.windows(2).all(|w| w[1] <= w[0]));
    }
}
