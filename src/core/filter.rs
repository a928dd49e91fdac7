//! Candidate filtering against observed feedback
//!
//! The filter keeps exactly the words for which [`Pattern::calculate`] reproduces
//! the observed pattern. There is no separate rule set to drift out of sync.

use super::{Pattern, Word};
use rayon::prelude::*;

/// Keep the candidates that would have produced `observed` for `guess`
///
/// Dictionary order is preserved. Candidates whose length differs from the
/// guess can never match.
///
/// # Examples
/// ```
/// use wordle_assist::core::{filter_candidates, Pattern, Word};
///
/// let words: Vec<Word> = ["slate", "posit", "zonal", "crane"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let guess = Word::new("crane").unwrap();
/// let observed = Pattern::parse("bbbbb").unwrap();
/// let kept = filter_candidates(&refs, &guess, &observed);
///
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].text(), "posit");
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    observed: &Pattern,
) -> Vec<&'a Word> {
    candidates
        .par_iter()
        .copied()
        .filter(|&candidate| is_consistent(candidate, guess, observed))
        .collect()
}

/// Check whether `candidate` could be the target given `guess` and `observed`
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, observed: &Pattern) -> bool {
    candidate.len() == guess.len() && Pattern::calculate(guess, candidate) == *observed
}
