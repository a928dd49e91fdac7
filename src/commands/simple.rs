//! Simple interactive CLI mode
//!
//! Text-based assistant: the user plays the real game elsewhere and types in
//! each guess and the colors it received.

use crate::core::{Feedback, Pattern, Word};
use crate::error::{SolverError, SolverResult};
use crate::output::{print_config, print_history, print_solution, print_win};
use crate::solver::{HistoryEntry, Solution, Solver, SolverConfig, find_words_with_letters};
use crate::wordlists::DictionaryLoader;
use colored::Colorize;
use std::io::{self, Write};

/// Commands accepted at any prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    New,
    Undo,
    Win,
}

impl Command {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "undo" | "u" => Some(Self::Undo),
            "win" | "correct" | "solved" => Some(Self::Win),
            _ => None,
        }
    }
}

/// What the user chose to play this turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessChoice {
    Word(Word),
    /// `0`: search for filler words instead of guessing
    FillerSearch,
}

/// Game state between prompts
pub struct Session {
    config: SolverConfig,
    history: Vec<HistoryEntry>,
}

impl Session {
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// 1-based number of the turn being played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    pub fn undo(&mut self) -> Option<HistoryEntry> {
        self.history.pop()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Feedback assumed when the user just presses enter
    ///
    /// All black, except the first tile is green in prefix mode.
    #[must_use]
    pub fn default_pattern(&self) -> Pattern {
        let pattern = Pattern::uniform(Feedback::Black, self.config.word_length());
        if self.config.prefix().is_some() {
            pattern.with_mark(0, Feedback::Green)
        } else {
            pattern
        }
    }

    /// Interpret a guess prompt answer
    ///
    /// A number picks that recommendation; `0` asks for a filler search.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an out-of-range number or an invalid word.
    pub fn resolve_guess(&self, input: &str, solution: &Solution) -> SolverResult<GuessChoice> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            if n == 0 {
                return Ok(GuessChoice::FillerSearch);
            }
            return solution
                .recommendations
                .get(n - 1)
                .ok_or_else(|| SolverError::invalid(format!("No recommendation #{n}")))
                .and_then(|rec| Word::new(rec.word.as_str()).map_err(Into::into))
                .map(GuessChoice::Word);
        }

        Word::with_length(input, self.config.word_length())
            .map(GuessChoice::Word)
            .map_err(Into::into)
    }

    /// Interpret a feedback prompt answer, falling back to [`Session::default_pattern`]
    ///
    /// # Errors
    /// Returns `InvalidArgument` for unknown symbols or the wrong length.
    pub fn parse_feedback(&self, input: &str) -> SolverResult<Pattern> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(self.default_pattern());
        }

        let pattern = Pattern::parse(input)?;
        if pattern.len() != self.config.word_length() {
            return Err(SolverError::invalid(format!(
                "Feedback must be {} symbols, got {}",
                self.config.word_length(),
                pattern.len()
            )));
        }
        Ok(pattern)
    }

    /// Words of the configured length covering the most of `letters`
    ///
    /// # Errors
    /// Returns `DictionaryNotFound` if the dictionary cannot be loaded.
    pub fn manual_fillers<L: DictionaryLoader>(
        &self,
        solver: &Solver<'_, L>,
        letters: &str,
    ) -> SolverResult<Vec<String>> {
        let dictionary = solver.dictionary(&self.config)?;
        let pool = dictionary.select(self.config.word_length(), None);
        Ok(find_words_with_letters(&pool, letters, solver.settings().max_fillers)
            .into_iter()
            .map(|w| w.text().to_string())
            .collect())
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// dictionary cannot be loaded.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<L: DictionaryLoader>(
    solver: &Solver<'_, L>,
    config: SolverConfig,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Assist - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_config(&config);
    println!("\nEnter the word you played (or a recommendation number, 0 for fillers).");
    println!("Then enter the colors it received:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use B/b/⬜ for black (not in word)");
    println!("  - Press enter for all black, or type 'win' if it was right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut session = Session::new(config);

    loop {
        let solution = solver
            .solve(session.config(), session.history())
            .map_err(|e| e.to_string())?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} candidates remaining",
            session.turn(),
            solution.remaining_count
        );
        println!("────────────────────────────────────────────────────────────");
        print_solution(&solution);
        println!();

        if solution.is_exhausted() {
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        }

        // Guess
        let guess = loop {
            let input = get_user_input("Your guess")?;

            match Command::parse(&input) {
                Some(Command::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Some(Command::New) => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                Some(Command::Undo) => {
                    if session.undo().is_some() {
                        println!("✓ Undone! Back to turn {}\n", session.turn());
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                Some(Command::Win) => println!("Enter the winning word first.\n"),
                None => match session.resolve_guess(&input, &solution) {
                    Ok(GuessChoice::Word(word)) => break Some(word),
                    Ok(GuessChoice::FillerSearch) => {
                        let letters = get_user_input("Letters to test")?;
                        match session.manual_fillers(solver, &letters) {
                            Ok(words) if words.is_empty() => println!("No words contain those letters.\n"),
                            Ok(words) => println!(
                                "🧪 {}\n",
                                words
                                    .iter()
                                    .map(|w| w.to_uppercase())
                                    .collect::<Vec<_>>()
                                    .join("  ")
                                    .bright_magenta()
                            ),
                            Err(e) => println!("❌ {e}\n"),
                        }
                    }
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(guess) = guess else {
            continue;
        };

        // Feedback
        let pattern = loop {
            let input = get_user_input(&format!(
                "Colors for {} (G/Y/B, enter = {})",
                guess.text().to_uppercase(),
                session.default_pattern()
            ))?;

            match Command::parse(&input) {
                Some(Command::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Some(Command::Win) => break Some(Pattern::uniform(Feedback::Green, guess.len())),
                Some(Command::New) => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                Some(Command::Undo) => break None,
                None => match session.parse_feedback(&input) {
                    Ok(pattern) => break Some(pattern),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(pattern) = pattern else {
            println!("Guess discarded.\n");
            continue;
        };

        let solved = pattern.is_perfect();
        session.push(HistoryEntry::new(guess, pattern));

        if solved {
            print_win(session.history());

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        } else {
            print_history(session.history());
            println!();
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
