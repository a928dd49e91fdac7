//! Word analysis command
//!
//! Scores a specific word against the length- and prefix-filtered dictionary
//! and breaks the score down by letter.

use crate::core::Word;
use crate::error::{SolverError, SolverResult};
use crate::solver::scorer::score_word;
use crate::solver::{LetterFrequency, Solver, SolverConfig, initial_candidates};
use crate::wordlists::DictionaryLoader;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub score: f64,
    /// Each distinct letter of the word with the number of candidates containing it
    pub letters: Vec<(u8, usize)>,
    pub total_candidates: usize,
    pub in_dictionary: bool,
    /// 1-based position among all candidates by score, if the word is a candidate
    pub rank: Option<usize>,
}

/// Analyze the letter-frequency score of a word
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or not `word_length` letters
/// - The dictionary cannot be loaded
pub fn analyze_word<L: DictionaryLoader>(
    solver: &Solver<'_, L>,
    config: &SolverConfig,
    word: &str,
) -> SolverResult<AnalysisResult> {
    let word = Word::with_length(word, config.word_length())
        .map_err(|e| SolverError::invalid(format!("Invalid word: {e}")))?;

    let dictionary = solver.dictionary(config)?;
    let candidates = initial_candidates(&dictionary, config);
    let frequency = LetterFrequency::from_candidates(&candidates);
    let score = score_word(&word, &frequency);

    let letters = word
        .profile()
        .distinct_letters()
        .map(|letter| (letter, frequency.get(letter)))
        .collect();

    let is_candidate = candidates.iter().any(|c| c.text() == word.text());
    let rank = is_candidate.then(|| {
        1 + candidates
            .iter()
            .filter(|c| score_word(c, &frequency) > score)
            .count()
    });

    Ok(AnalysisResult {
        word: word.text().to_string(),
        score,
        letters,
        total_candidates: candidates.len(),
        in_dictionary: dictionary.contains(word.text()),
        rank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverSettings;
    use crate::wordlists::{DictionaryCache, MemoryLoader};

    fn cache() -> DictionaryCache<MemoryLoader> {
        DictionaryCache::new(
            MemoryLoader::new().with_dictionary("english", ["crane", "slate", "plier", "zonal"]),
        )
    }

    #[test]
    fn analyze_candidate_word() {
        let cache = cache();
        let solver = Solver::new(&cache, SolverSettings::default());
        let config = SolverConfig::new(5, None, "english").unwrap();

        let result = analyze_word(&solver, &config, "Slate").unwrap();

        assert_eq!(result.word, "slate");
        assert!((result.score - 11.0).abs() < f64::EPSILON);
        assert_eq!(result.total_candidates, 4);
        assert!(result.in_dictionary);
        assert_eq!(result.rank, Some(1));
        assert_eq!(result.letters.len(), 5);
        assert!(result.letters.contains(&(b'a', 3)));
    }

    #[test]
    fn analyze_word_outside_dictionary() {
        let cache = cache();
        let solver = Solver::new(&cache, SolverSettings::default());
        let config = SolverConfig::new(5, None, "english").unwrap();

        let result = analyze_word(&solver, &config, "zzzzz").unwrap();

        assert!(!result.in_dictionary);
        assert_eq!(result.rank, None);
        // One distinct letter, present in one candidate
        assert_eq!(result.letters, vec![(b'z', 1)]);
        assert!((result.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn analyze_invalid_word() {
        let cache = cache();
        let solver = Solver::new(&cache, SolverSettings::default());
        let config = SolverConfig::new(5, None, "english").unwrap();

        assert!(analyze_word(&solver, &config, "cranes").is_err());
        assert!(analyze_word(&solver, &config, "cr4ne").is_err());
    }
}
