//! Dictionaries for word guessing
//!
//! Loaders produce raw word lists, [`Dictionary`] normalizes and profiles
//! them, and [`DictionaryCache`] keeps each one for the life of the process.

mod cache;
mod dictionary;
mod embedded;
pub mod loader;

pub use cache::DictionaryCache;
pub use dictionary::Dictionary;
pub use embedded::{ENGLISH, ENGLISH_COUNT};
pub use loader::{DictionaryLoader, DirectoryLoader, EmbeddedLoader, FallbackLoader, MemoryLoader};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_count_matches_const() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
    }

    #[test]
    fn english_words_are_lowercase_letters() {
        for &word in ENGLISH {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn english_has_five_letter_words() {
        let dict = Dictionary::from_entries("english", ENGLISH);
        assert!(dict.select(5, None).len() > 1000);
        assert_eq!(dict.len(), ENGLISH_COUNT, "bundled list has no duplicates");
    }
}
