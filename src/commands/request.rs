//! JSON request command
//!
//! Reads one request message from a file or stdin and answers it through the
//! same boundary any other dispatcher would use.

use crate::solver::{Solver, solve_json};
use crate::wordlists::DictionaryLoader;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the raw request text from `path`, or from stdin when `None`
///
/// # Errors
/// Returns an I/O error if the file or stdin cannot be read.
pub fn read_request(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Answer a JSON request, optionally pretty-printed
///
/// Errors are part of the reply, so this never fails.
pub fn run_request<L: DictionaryLoader>(solver: &Solver<'_, L>, input: &str, pretty: bool) -> String {
    let reply = solve_json(solver, input);
    if !pretty {
        return reply;
    }

    serde_json::from_str::<serde_json::Value>(&reply)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or(reply)
}
