//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Uppercase letters separated by spaces, e.g. "A E S"
#[must_use]
pub fn format_letters<I: IntoIterator<Item = u8>>(letters: I) -> String {
    letters
        .into_iter()
        .map(|b| char::from(b.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay words out in rows of `columns`, each padded to `width`
#[must_use]
pub fn format_columns(words: &[String], columns: usize, width: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<width$}", w.to_uppercase()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// A guess rendered as colored letter tiles
#[must_use]
pub fn guess_tiles(guess: &Word, pattern: &Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.marks())
        .map(|(&letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: u8, mark: Feedback) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match mark {
        Feedback::Green => text.black().on_green().bold(),
        Feedback::Yellow => text.black().on_yellow().bold(),
        Feedback::Black => text.white().on_bright_black(),
    }
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_label(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
