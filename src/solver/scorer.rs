//! Letter-frequency scoring
//!
//! A letter's frequency is the number of candidate words that contain it at
//! least once. A word scores the sum of those frequencies over its distinct
//! letters, so repeated letters add nothing.

use crate::core::{ALPHABET_SIZE, Word, letter_index};
use rayon::prelude::*;
use serde::Serialize;

/// Per-letter document frequency over a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: [usize; ALPHABET_SIZE],
    words: usize,
}

impl LetterFrequency {
    /// Count, for every letter, how many candidates contain it
    #[must_use]
    pub fn from_candidates(candidates: &[&Word]) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        for word in candidates {
            for letter in word.profile().distinct_letters() {
                if let Some(i) = letter_index(letter) {
                    counts[i] += 1;
                }
            }
        }
        Self {
            counts,
            words: candidates.len(),
        }
    }

    /// Number of candidates containing `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> usize {
        letter_index(letter).map_or(0, |i| self.counts[i])
    }

    /// Number of candidates counted
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }

    /// Letters with a nonzero count, most frequent first (ties alphabetical)
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, usize)> {
        let mut ranked: Vec<(u8, usize)> = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| (b'a' + i as u8, count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// A ranked guess
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub word: String,
    pub score: f64,
}

/// Score `word` against precomputed frequencies
#[must_use]
pub fn score_word(word: &Word, frequency: &LetterFrequency) -> f64 {
    word.profile()
        .distinct_letters()
        .map(|letter| frequency.get(letter) as f64)
        .sum()
}

/// Score `word` against a candidate set
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::score;
///
/// let words: Vec<Word> = ["crane", "slate"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// // a, e appear in both words; c, r, n in one
/// assert_eq!(score(&words[0], &refs), 7.0);
/// ```
#[must_use]
pub fn score(word: &Word, candidates: &[&Word]) -> f64 {
    score_word(word, &LetterFrequency::from_candidates(candidates))
}

/// Rank the candidates by descending score, keeping at most `limit`
///
/// Ties keep dictionary order.
#[must_use]
pub fn recommend(candidates: &[&Word], limit: usize) -> Vec<Recommendation> {
    let frequency = LetterFrequency::from_candidates(candidates);

    let mut scored: Vec<(&Word, f64)> = candidates
        .par_iter()
        .map(|&word| (word, score_word(word, &frequency)))
        .collect();

    // Stable sort: equal scores stay in dictionary order
    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    scored
        .into_iter()
        .take(limit)
        .map(|(word, score)| Recommendation {
            word: word.text().to_string(),
            score,
        })
        .collect()
}

/// Percentage share of each letter among all letters of `words`
///
/// When `prefix` is given, the first letter of every word is left out. The
/// result is sorted by descending percentage, ties alphabetical.
#[must_use]
pub fn letter_frequency_percent(words: &[&Word], prefix: Option<u8>) -> Vec<(u8, f64)> {
    let skip = usize::from(prefix.is_some());
    let mut counts = [0usize; ALPHABET_SIZE];
    let mut total = 0usize;

    for word in words {
        for &letter in word.chars().iter().skip(skip) {
            if let Some(i) = letter_index(letter) {
                counts[i] += 1;
                total += 1;
            }
        }
    }

    if total == 0 {
        return Vec::new();
    }

    let mut percentages: Vec<(u8, f64)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(i, &count)| (b'a' + i as u8, count as f64 / total as f64 * 100.0))
        .collect();
    percentages.sort_by(|a, b| b.1.total_cmp(&a.1));
    percentages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn frequency_counts_words_not_occurrences() {
        let list = words(&["speed", "erase", "crane"]);
        let refs: Vec<&Word> = list.iter().collect();
        let freq = LetterFrequency::from_candidates(&refs);

        assert_eq!(freq.get(b'e'), 3);
        assert_eq!(freq.get(b's'), 2);
        assert_eq!(freq.get(b'z'), 0);
        assert_eq!(freq.word_count(), 3);
    }

    #[test]
    fn repeated_letters_score_once() {
        let list = words(&["speed", "spend"]);
        let refs: Vec<&Word> = list.iter().collect();
        let freq = LetterFrequency::from_candidates(&refs);

        // s=2, p=2, e=2, d=2 ; the second E adds nothing
        assert_eq!(score_word(&list[0], &freq), 8.0);
        // s=2, p=2, e=2, n=1, d=2
        assert_eq!(score_word(&list[1], &freq), 9.0);
    }

    #[test]
    fn recommendations_scenario_a() {
        let list = words(&["crane", "slate", "plier", "zonal"]);
        let refs: Vec<&Word> = list.iter().collect();
        let recs = recommend(&refs, 9);

        // a:3 e:3 l:3 r:2 n:2 c,s,t,p,i,z,o:1
        let ranked: Vec<(&str, f64)> = recs.iter().map(|r| (r.word.as_str(), r.score)).collect();
        assert_eq!(
            ranked,
            vec![
                ("crane", 11.0),
                ("slate", 11.0),
                ("plier", 10.0),
                ("zonal", 10.0),
            ]
        );
    }

    #[test]
    fn ties_keep_dictionary_order() {
        let list = words(&["abc", "bca", "cab"]);
        let refs: Vec<&Word> = list.iter().collect();
        let recs = recommend(&refs, 9);

        let order: Vec<&str> = recs.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(order, vec!["abc", "bca", "cab"]);
    }

    #[test]
    fn recommend_respects_limit_and_empty() {
        let list = words(&["crane", "slate", "plier"]);
        let refs: Vec<&Word> = list.iter().collect();
        assert_eq!(recommend(&refs, 2).len(), 2);
        assert!(recommend(&[], 9).is_empty());
    }

    #[test]
    fn ranked_letters() {
        let list = words(&["aab", "abc"]);
        let refs: Vec<&Word> = list.iter().collect();
        let ranked = LetterFrequency::from_candidates(&refs).ranked();
        assert_eq!(ranked, vec![(b'a', 2), (b'b', 2), (b'c', 1)]);
    }

    #[test]
    fn percent_frequency_skips_prefix() {
        let list = words(&["sat", "sit"]);
        let refs: Vec<&Word> = list.iter().collect();

        let with_prefix = letter_frequency_percent(&refs, Some(b's'));
        assert_eq!(with_prefix[0], (b't', 50.0));
        assert!(with_prefix.iter().all(|&(letter, _)| letter != b's'));

        let total: f64 = letter_frequency_percent(&refs, None).iter().map(|p| p.1).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn percent_frequency_empty() {
        assert!(letter_frequency_percent(&[], None).is_empty());
    }
}
