//! Dictionary word representation
//!
//! A Word stores a lowercase word of any length together with its letter-count
//! profile, computed once at construction so filtering never recounts letters.

use std::fmt;
use thiserror::Error;

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;

/// Per-word letter occurrence counts, indexed by `letter - b'a'`
///
/// Used as the starting pool when classifying a guess against this word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterProfile([u32; ALPHABET_SIZE]);

impl LetterProfile {
    /// Count the letters of a lowercase ASCII byte slice
    ///
    /// Bytes outside `a..=z` are ignored.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0u32; ALPHABET_SIZE];
        for &b in bytes {
            if let Some(i) = letter_index(b) {
                counts[i] = counts[i].saturating_add(1);
            }
        }
        Self(counts)
    }

    /// Number of times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |i| self.0[i])
    }

    /// Check whether `letter` occurs at least once
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.count(letter) > 0
    }

    /// Remove one occurrence of `letter`, returning whether one was available
    #[inline]
    pub(crate) fn take(&mut self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(i) if self.0[i] > 0 => {
                self.0[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Iterate over the distinct letters present, in alphabetical order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, _)| b'a' + i as u8)
    }

    /// Number of distinct letters present
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.0.iter().filter(|&&count| count > 0).count()
    }
}

/// Map a lowercase ASCII letter to its alphabet index
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// A lowercase word with its precomputed letter profile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    profile: LetterProfile,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let profile = LetterProfile::from_bytes(text.as_bytes());
        Ok(Self { text, profile })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error from [`Word::new`].
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed Word; provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at `position`, if in range
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<u8> {
        self.chars().get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.profile.contains(letter)
    }

    /// Check if the word starts with `letter`
    #[inline]
    #[must_use]
    pub fn starts_with(&self, letter: u8) -> bool {
        self.char_at(0) == Some(letter)
    }

    /// The precomputed letter-count profile
    #[inline]
    #[must_use]
    pub const fn profile(&self) -> &LetterProfile {
        &self.profile
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("dictionary").unwrap().len(), 10);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_with_length_checks_length() {
        assert!(Word::with_length("crane", 5).is_ok());
        assert_eq!(
            Word::with_length("cranes", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), Some(b'c'));
        assert_eq!(word.char_at(4), Some(b'e'));
        assert_eq!(word.char_at(5), None);
        assert!(word.starts_with(b'c'));
        assert!(!word.starts_with(b'r'));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn profile_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let profile = word.profile();
        assert_eq!(profile.count(b's'), 1);
        assert_eq!(profile.count(b'e'), 2);
        assert_eq!(profile.count(b'z'), 0);
        assert_eq!(profile.distinct_count(), 4);
        assert_eq!(
            profile.distinct_letters().collect::<Vec<_>>(),
            vec![b'd', b'e', b'p', b's']
        );
    }

    #[test]
    fn profile_take_consumes_pool() {
        let mut pool = *Word::new("glass").unwrap().profile();
        assert!(pool.take(b's'));
        assert!(pool.take(b's'));
        assert!(!pool.take(b's'));
        assert!(!pool.take(b'z'));
    }

    #[test]
    fn profile_counts_long_runs() {
        let word = Word::new("a".repeat(300)).unwrap();
        assert_eq!(word.profile().count(b'a'), 300);
        assert_eq!(word.profile().distinct_count(), 1);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
