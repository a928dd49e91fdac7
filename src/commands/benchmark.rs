//! Benchmark command
//!
//! Self-play over random targets: every turn plays the top recommendation and
//! feeds back the classification against the hidden target.

use crate::core::{Pattern, Word};
use crate::error::SolverResult;
use crate::solver::{HistoryEntry, Solver, SolverConfig, initial_candidates};
use crate::wordlists::DictionaryLoader;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// One self-played game
pub struct GameOutcome {
    pub target: String,
    pub guesses: Vec<(String, Pattern)>,
    pub solved: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct random targets from the filtered dictionary
///
/// # Errors
/// Returns `DictionaryNotFound` if the dictionary cannot be loaded.
pub fn pick_targets<L: DictionaryLoader>(
    solver: &Solver<'_, L>,
    config: &SolverConfig,
    count: usize,
    seed: Option<u64>,
) -> SolverResult<Vec<Word>> {
    let dictionary = solver.dictionary(config)?;
    let pool = initial_candidates(&dictionary, config);

    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    Ok(pool
        .choose_multiple(&mut rng, count)
        .map(|&word| word.clone())
        .collect())
}

/// Play one game against `target`, always guessing the top recommendation
///
/// # Errors
/// Returns any error from the underlying solve.
pub fn play_game<L: DictionaryLoader>(
    solver: &Solver<'_, L>,
    config: &SolverConfig,
    target: &Word,
    max_guesses: usize,
) -> SolverResult<GameOutcome> {
    let mut history: Vec<HistoryEntry> = Vec::new();

    while history.len() < max_guesses {
        let solution = solver.solve(config, &history)?;
        let Some(top) = solution.recommendations.first() else {
            break;
        };

        let guess = Word::new(top.word.as_str())?;
        let pattern = Pattern::calculate(&guess, target);
        let solved = pattern.is_perfect();
        history.push(HistoryEntry::new(guess, pattern));

        if solved {
            break;
        }
    }

    let solved = history.last().is_some_and(|e| e.pattern().is_perfect());
    debug!(target_word = target.text(), guesses = history.len(), solved, "game finished");

    Ok(GameOutcome {
        target: target.text().to_string(),
        guesses: history
            .into_iter()
            .map(|e| (e.guess().text().to_string(), e.pattern().clone()))
            .collect(),
        solved,
    })
}

/// Run benchmark on a set of target words
///
/// # Errors
/// Returns the first solve error encountered.
pub fn run_benchmark<L: DictionaryLoader>(
    solver: &Solver<'_, L>,
    config: &SolverConfig,
    target_words: &[Word],
    max_guesses: usize,
) -> SolverResult<BenchmarkResult> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failed = Vec::new();

    let pb = ProgressBar::new(target_words.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    for target in target_words {
        let outcome = play_game(solver, config, target, max_guesses)?;
        let guesses = outcome.guesses.len();

        if outcome.solved {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses_seen = max_guesses_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed.push(outcome.target);
        }

        pb.inc(1);
        pb.set_message(format!("{} failed", failed.len()));
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = target_words.len();
    let solved = total_words - failed.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverSettings;
    use crate::wordlists::{DictionaryCache, EmbeddedLoader, MemoryLoader};

    fn config() -> SolverConfig {
        SolverConfig::new(5, None, "english").unwrap()
    }

    #[test]
    fn game_solves_known_target() {
        let cache = DictionaryCache::new(
            MemoryLoader::new().with_dictionary("english", ["crane", "slate", "plier", "zonal"]),
        );
        let solver = Solver::new(&cache, SolverSettings::default());
        let target = Word::new("zonal").unwrap();

        let outcome = play_game(&solver, &config(), &target, MAX_GUESSES).unwrap();

        assert!(outcome.solved);
        assert_eq!(outcome.guesses[0].0, "crane");
        assert_eq!(outcome.guesses.last().unwrap().0, "zonal");
        assert!(outcome.guesses.len() <= 4);
    }

    #[test]
    fn game_respects_guess_limit() {
        let words = ["tight", "fight", "night", "light", "sight", "might", "right", "wight"];
        let cache = DictionaryCache::new(MemoryLoader::new().with_dictionary("english", words));
        let solver = Solver::new(&cache, SolverSettings::default());
        let target = Word::new("wight").unwrap();

        // Every guess only rules itself out, so the last word needs all eight
        let outcome = play_game(&solver, &config(), &target, 3).unwrap();

        assert!(!outcome.solved);
        assert_eq!(outcome.guesses.len(), 3);
    }

    #[test]
    fn seeded_targets_are_reproducible() {
        let cache = DictionaryCache::new(EmbeddedLoader);
        let solver = Solver::new(&cache, SolverSettings::default());

        let a = pick_targets(&solver, &config(), 5, Some(7)).unwrap();
        let b = pick_targets(&solver, &config(), 5, Some(7)).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert!(a.iter().all(|w| w.len() == 5));
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let cache = DictionaryCache::new(EmbeddedLoader);
        let solver = Solver::new(&cache, SolverSettings::default());
        let targets = pick_targets(&solver, &config(), 10, Some(42)).unwrap();

        let result = run_benchmark(&solver, &config(), &targets, MAX_GUESSES).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved + result.failed.len(), 10);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_GUESSES).contains(&guess_count));
        }
    }

    #[test]
    fn benchmark_empty_word_list() {
        let cache = DictionaryCache::new(EmbeddedLoader);
        let solver = Solver::new(&cache, SolverSettings::default());

        let result = run_benchmark(&solver, &config(), &[], MAX_GUESSES).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.failed.is_empty());
    }
}
