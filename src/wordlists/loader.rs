//! Dictionary loaders
//!
//! A loader turns a dictionary id into raw, ordered entries. Normalization and
//! profiling happen afterwards in [`Dictionary::from_entries`](super::Dictionary::from_entries).

use super::embedded::ENGLISH;
use crate::error::{SolverError, SolverResult};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of raw dictionary entries
///
/// Every failure to produce a list, whatever the cause, is reported as
/// `DictionaryNotFound` with a message describing the cause.
pub trait DictionaryLoader: Send + Sync {
    /// Load the raw entries for `id`, in dictionary order
    ///
    /// # Errors
    /// Returns `SolverError::DictionaryNotFound` if the id is unknown or unreadable.
    fn load(&self, id: &str) -> SolverResult<Vec<String>>;
}

/// Strip a `.json` / `.txt` suffix so "english" and "english.json" name the same list
fn base_id(id: &str) -> &str {
    id.strip_suffix(".json")
        .or_else(|| id.strip_suffix(".txt"))
        .unwrap_or(id)
}

/// Dictionaries compiled into the binary
///
/// Known ids: `english` (also `english.json`, `english.txt`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl DictionaryLoader for EmbeddedLoader {
    fn load(&self, id: &str) -> SolverResult<Vec<String>> {
        match base_id(id) {
            "english" => Ok(ENGLISH.iter().map(|&w| w.to_string()).collect()),
            _ => Err(SolverError::not_found(format!(
                "Dictionary '{id}' not found"
            ))),
        }
    }
}

/// In-memory dictionaries keyed by id
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    lists: FxHashMap<String, Vec<String>>,
}

impl MemoryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a word list under `id`
    #[must_use]
    pub fn with_dictionary<I, S>(mut self, id: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists
            .insert(id.into(), words.into_iter().map(Into::into).collect());
        self
    }
}

impl DictionaryLoader for MemoryLoader {
    fn load(&self, id: &str) -> SolverResult<Vec<String>> {
        self.lists
            .get(id)
            .cloned()
            .ok_or_else(|| SolverError::not_found(format!("Dictionary '{id}' not found")))
    }
}

/// Dictionaries stored as files in a directory
///
/// For id `name` the loader tries `name`, `name.json` and `name.txt`. JSON
/// files must hold an array of strings; anything else is read as one word
/// per line.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, id: &str) -> Option<PathBuf> {
        let base = base_id(id);
        [id.to_string(), format!("{base}.json"), format!("{base}.txt")]
            .into_iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }
}

/// Ids must name a file directly inside the root
fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\'])
        && !id.contains("..")
}

impl DictionaryLoader for DirectoryLoader {
    fn load(&self, id: &str) -> SolverResult<Vec<String>> {
        if !is_safe_id(id) {
            return Err(SolverError::not_found(format!(
                "Dictionary '{id}' not found"
            )));
        }

        let path = self.resolve(id).ok_or_else(|| {
            SolverError::not_found(format!("Dictionary '{id}' not found"))
        })?;

        debug!(path = %path.display(), "reading dictionary file");
        read_entries(&path).map_err(|e| {
            SolverError::not_found(format!("Failed to load dictionary '{id}': {e}"))
        })
    }
}

/// Use `primary`, falling back to `fallback` for ids `primary` doesn't know
#[derive(Debug, Clone)]
pub struct FallbackLoader<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackLoader<P, F> {
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: DictionaryLoader, F: DictionaryLoader> DictionaryLoader for FallbackLoader<P, F> {
    fn load(&self, id: &str) -> SolverResult<Vec<String>> {
        self.primary.load(id).or_else(|_| self.fallback.load(id))
    }
}

impl<L: DictionaryLoader + ?Sized> DictionaryLoader for Box<L> {
    fn load(&self, id: &str) -> SolverResult<Vec<String>> {
        (**self).load(id)
    }
}

/// Read raw entries from a JSON array or newline-separated text file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `InvalidData` if a JSON
/// file does not hold an array.
pub fn read_entries<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let looks_like_json = path.extension().is_some_and(|ext| ext == "json")
        || content.trim_start().starts_with('[');

    if looks_like_json {
        parse_json_entries(&content)
    } else {
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }
}

fn parse_json_entries(content: &str) -> io::Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let serde_json::Value::Array(items) = value else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Invalid dictionary format: expected a JSON array of words",
        ));
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::String(word) => Some(word),
            _ => None,
        })
        .collect())
}
