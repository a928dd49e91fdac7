//! Guess feedback classification and representation
//!
//! A pattern is the ordered per-letter feedback for one guess:
//! - `Black`  = letter not in word (or all its occurrences already accounted for)
//! - `Yellow` = letter in word, wrong position
//! - `Green`  = letter in correct position
//!
//! [`Pattern::calculate`] is the single classification rule. Candidate filtering
//! reuses it, so feedback means the same thing whether generated or evaluated.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Absent
    Black,
    /// Present, wrong position
    Yellow,
    /// Correct position
    Green,
}

impl Feedback {
    /// Parse one feedback symbol
    ///
    /// Accepts `b`/`y`/`g` in either case, and the ⬛/⬜/🟨/🟩 squares.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'b' | 'B' | '⬛' | '⬜' => Some(Self::Black),
            'y' | 'Y' | '🟨' => Some(Self::Yellow),
            'g' | 'G' | '🟩' => Some(Self::Green),
            _ => None,
        }
    }

    /// Parse one wire symbol, lowercase `b`/`y`/`g` only
    #[must_use]
    pub const fn from_wire(ch: char) -> Option<Self> {
        match ch {
            'b' => Some(Self::Black),
            'y' => Some(Self::Yellow),
            'g' => Some(Self::Green),
            _ => None,
        }
    }

    /// The wire symbol for this feedback
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Black => 'b',
            Self::Yellow => 'y',
            Self::Green => 'g',
        }
    }

    /// The colored square for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Black => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Feedback must not be empty")]
    Empty,
    #[error("Invalid feedback character '{0}' (expected 'b', 'y' or 'g')")]
    InvalidSymbol(char),
}

/// Feedback for a whole guess, one entry per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Feedback>);

impl Pattern {
    /// Create a pattern from per-letter feedback
    #[must_use]
    pub const fn new(marks: Vec<Feedback>) -> Self {
        Self(marks)
    }

    /// A pattern of `length` identical marks
    #[must_use]
    pub fn uniform(mark: Feedback, length: usize) -> Self {
        Self(vec![mark; length])
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Implements the duplicate-safe two-pass rule:
    /// 1. Mark every exact position match green and remove one occurrence of
    ///    that letter from a working copy of the target's letter pool
    /// 2. Left to right over the remaining letters, mark yellow while the pool
    ///    still holds that letter (consuming it), otherwise black
    ///
    /// Positions past the end of `target` are black.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &target).to_string(), "bbgbg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess_chars = guess.chars();
        let target_chars = target.chars();
        let mut marks = vec![Feedback::Black; guess_chars.len()];
        let mut pool = *target.profile();

        // First pass: greens
        for (i, &letter) in guess_chars.iter().enumerate() {
            if target_chars.get(i) == Some(&letter) {
                marks[i] = Feedback::Green;
                pool.take(letter);
            }
        }

        // Second pass: yellows from whatever the greens left over
        for (i, &letter) in guess_chars.iter().enumerate() {
            if marks[i] != Feedback::Green && pool.take(letter) {
                marks[i] = Feedback::Yellow;
            }
        }

        Self(marks)
    }

    /// Per-letter feedback in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Feedback] {
        &self.0
    }

    /// Number of letters covered
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Feedback::Green)
    }

    /// Count the number of green marks
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&m| m == Feedback::Green).count()
    }

    /// Count the number of yellow marks
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&m| m == Feedback::Yellow).count()
    }

    /// Replace the mark at `position`; out-of-range positions are ignored
    #[must_use]
    pub fn with_mark(mut self, position: usize, mark: Feedback) -> Self {
        if let Some(slot) = self.0.get_mut(position) {
            *slot = mark;
        }
        self
    }

    /// Parse a pattern from a string like "gybbg" or "🟩🟨⬜⬜🟩"
    ///
    /// # Errors
    /// Returns `PatternError` for an empty string or any unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GYBBG").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("gyx").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        s.chars()
            .map(|ch| Feedback::from_char(ch).ok_or(PatternError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parse feedback in the strict wire form: lowercase `b`/`y`/`g`, nothing else
    ///
    /// # Errors
    /// Returns `PatternError` for an empty string or any other symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// assert!(Pattern::parse_wire("gybbg").is_ok());
    /// assert!(Pattern::parse_wire("GYBBG").is_err());
    /// ```
    pub fn parse_wire(s: &str) -> Result<Self, PatternError> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        s.chars()
            .map(|ch| Feedback::from_wire(ch).ok_or(PatternError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// let p = Pattern::parse("gybgy").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.as_char())?;
        }
        Ok(())
    }
}
