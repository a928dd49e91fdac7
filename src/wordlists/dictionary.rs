//! Normalized, immutable dictionaries

use crate::core::{LetterProfile, Word};
use rustc_hash::FxHashMap;
use tracing::warn;

/// An ordered, deduplicated word list with per-word letter profiles
///
/// Built once per dictionary id and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dictionary {
    id: String,
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Normalize raw entries into a dictionary
    ///
    /// Entries are trimmed and lowercased. Blank entries, entries with
    /// non-letters, and repeats of an earlier entry are dropped; the first
    /// occurrence keeps its position.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_entries("demo", ["Crane", " slate ", "crane", "no way"]);
    /// let texts: Vec<&str> = dict.words().iter().map(|w| w.text()).collect();
    /// assert_eq!(texts, vec!["crane", "slate"]);
    /// ```
    pub fn from_entries<I, S>(id: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = id.into();
        let mut words = Vec::new();
        let mut index = FxHashMap::default();
        let mut skipped = 0usize;

        for entry in entries {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    if !index.contains_key(word.text()) {
                        index.insert(word.text().to_string(), words.len());
                        words.push(word);
                    }
                }
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(dictionary = %id, skipped, "skipped invalid dictionary entries");
        }

        Self { id, words, index }
    }

    /// The identifier this dictionary was loaded under
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All words in dictionary order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// The precomputed letter profile of a dictionary word
    #[must_use]
    pub fn profile(&self, text: &str) -> Option<&LetterProfile> {
        self.get(text).map(Word::profile)
    }

    /// Words of exactly `length` letters, optionally starting with `prefix`
    ///
    /// Dictionary order is preserved.
    #[must_use]
    pub fn select(&self, length: usize, prefix: Option<u8>) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|w| w.len() == length && prefix.is_none_or(|p| w.starts_with(p)))
            .collect()
    }
}
