//! Variable position analysis and filler words
//!
//! A position is variable when the remaining candidates disagree on its
//! letter. Filler words are picked from the whole dictionary to cover as many
//! of those still-untested letters at once as possible.

use crate::core::{ALPHABET_SIZE, Word, letter_index};
use std::collections::{BTreeMap, BTreeSet};

/// Distinct letters seen at each variable position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariablePositions(BTreeMap<usize, BTreeSet<u8>>);

impl VariablePositions {
    /// Collect the letters at every position and keep the positions with more than one
    #[must_use]
    pub fn analyze(candidates: &[&Word], word_length: usize) -> Self {
        let longest = candidates.iter().map(|w| w.len()).max().unwrap_or(0);
        let mut seen: Vec<BTreeSet<u8>> = vec![BTreeSet::new(); longest.min(word_length)];

        for word in candidates {
            for (slot, &letter) in seen.iter_mut().zip(word.chars()) {
                slot.insert(letter);
            }
        }

        Self(
            seen.into_iter()
                .enumerate()
                .filter(|(_, letters)| letters.len() > 1)
                .collect(),
        )
    }

    /// Check whether candidates disagree at `position`
    #[must_use]
    pub fn is_variable(&self, position: usize) -> bool {
        self.0.contains_key(&position)
    }

    /// Letters seen at `position`, if it is variable
    #[must_use]
    pub fn letters_at(&self, position: usize) -> Option<&BTreeSet<u8>> {
        self.0.get(&position)
    }

    /// Union of letters over all variable positions
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.0.values().flatten().copied().collect()
    }

    /// Variable positions in ascending order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wire form: position to sorted single-letter strings
    #[must_use]
    pub fn to_wire(&self) -> BTreeMap<usize, Vec<String>> {
        self.0
            .iter()
            .map(|(&position, letters)| {
                let letters = letters.iter().map(|&l| char::from(l).to_string()).collect();
                (position, letters)
            })
            .collect()
    }
}

/// A set of lowercase letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet([bool; ALPHABET_SIZE]);

impl LetterSet {
    /// Every letter appearing in any of `guesses`
    pub fn tested_by<'a, I>(guesses: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        guesses
            .into_iter()
            .flat_map(|w| w.chars().iter().copied())
            .collect()
    }

    /// Parse letters from text, ignoring anything that is not a-z (case-insensitive)
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.bytes().map(|b| b.to_ascii_lowercase()).collect()
    }

    pub fn insert(&mut self, letter: u8) {
        if let Some(i) = letter_index(letter) {
            self.0[i] = true;
        }
    }

    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        letter_index(letter).is_some_and(|i| self.0[i])
    }

    /// Letters in `self` but not in `other`
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = *self;
        for (slot, &taken) in out.0.iter_mut().zip(&other.0) {
            *slot &= !taken;
        }
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&present| present).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &present)| present)
            .map(|(i, _)| b'a' + i as u8)
    }

    /// Number of letters of this set that `word` contains
    #[must_use]
    pub fn coverage(&self, word: &Word) -> usize {
        self.iter().filter(|&letter| word.has_letter(letter)).count()
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::default();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Rank `pool` by how many `letters` each word contains, best first
///
/// Words containing none are dropped; ties keep pool order.
#[must_use]
pub fn rank_by_coverage<'a>(pool: &[&'a Word], letters: &LetterSet, limit: usize) -> Vec<&'a Word> {
    if letters.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&Word, usize)> = pool
        .iter()
        .map(|&word| (word, letters.coverage(word)))
        .filter(|&(_, hits)| hits > 0)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored.into_iter().take(limit).map(|(word, _)| word).collect()
}

/// Filler words covering the untested letters of the variable positions
///
/// `pool` is the length-filtered dictionary, not the candidate set. Letters
/// already played in `guesses` are not worth trying again.
#[must_use]
pub fn filler_suggestions<'a, 'g, G>(
    pool: &[&'a Word],
    variable: &VariablePositions,
    guesses: G,
    limit: usize,
) -> Vec<&'a Word>
where
    G: IntoIterator<Item = &'g Word>,
{
    let untested = variable.letters().difference(&LetterSet::tested_by(guesses));
    rank_by_coverage(pool, &untested, limit)
}

/// Words containing the most of the requested `letters`
///
/// The manual form of the filler search: the caller picks the letters.
#[must_use]
pub fn find_words_with_letters<'a>(pool: &[&'a Word], letters: &str, limit: usize) -> Vec<&'a Word> {
    rank_by_coverage(pool, &LetterSet::from_text(letters), limit)
}
