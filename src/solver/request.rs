//! Request/response messages
//!
//! The transport-neutral message layout consumed from and returned to whatever
//! dispatcher sits in front of the solver. Field names are camelCase on the wire.

use super::engine::{HistoryEntry, Solution, Solver, SolverConfig};
use super::scorer::Recommendation;
use crate::error::{SolverError, SolverResult};
use crate::wordlists::DictionaryLoader;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// Default word length when a request omits it
pub const DEFAULT_WORD_LENGTH: i64 = 5;

/// Default dictionary when a request omits it
pub const DEFAULT_DICTIONARY: &str = "english";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolveRequest {
    pub config: RequestConfig,
    #[serde(default)]
    pub history: Vec<RequestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig {
    #[serde(default = "default_word_length")]
    pub word_length: i64,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default = "default_dictionary")]
    pub dictionary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestEntry {
    pub guess: String,
    pub feedback: String,
}

const fn default_word_length() -> i64 {
    DEFAULT_WORD_LENGTH
}

fn default_dictionary() -> String {
    DEFAULT_DICTIONARY.to_string()
}

impl SolveRequest {
    /// Validate the whole request into domain types
    ///
    /// # Errors
    /// Returns `InvalidArgument` naming the first invalid field.
    pub fn into_query(self) -> SolverResult<(SolverConfig, Vec<HistoryEntry>)> {
        let config = SolverConfig::new(
            self.config.word_length,
            self.config.prefix.as_deref(),
            self.config.dictionary,
        )?;

        let history = self
            .history
            .iter()
            .map(|e| HistoryEntry::parse_wire(&e.guess, &e.feedback, config.word_length()))
            .collect::<SolverResult<Vec<_>>>()?;

        Ok((config, history))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub recommendations: Vec<Recommendation>,
    pub remaining_words: Vec<String>,
    pub remaining_count: usize,
    pub variable_positions: BTreeMap<usize, Vec<String>>,
    pub filler_suggestions: Vec<String>,
    pub guess_count: usize,
}

impl From<Solution> for SolveResponse {
    fn from(solution: Solution) -> Self {
        Self {
            variable_positions: solution.variable_positions.to_wire(),
            recommendations: solution.recommendations,
            remaining_words: solution.remaining_words,
            remaining_count: solution.remaining_count,
            filler_suggestions: solution.filler_suggestions,
            guess_count: solution.guess_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl From<SolverError> for ErrorResponse {
    fn from(e: SolverError) -> Self {
        Self {
            error: e.code(),
            message: e.to_string(),
        }
    }
}

/// Either a response or an error object, never both
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Solved(SolveResponse),
    Failed(ErrorResponse),
}

impl From<SolverResult<SolveResponse>> for Reply {
    fn from(result: SolverResult<SolveResponse>) -> Self {
        match result {
            Ok(response) => Self::Solved(response),
            Err(e) => Self::Failed(e.into()),
        }
    }
}

/// Validate and solve one request
///
/// A panic during the solve is reported as `INTERNAL_ERROR` instead of
/// unwinding into the caller.
pub fn handle_request<L: DictionaryLoader>(solver: &Solver<'_, L>, request: SolveRequest) -> Reply {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> SolverResult<SolveResponse> {
        let (config, history) = request.into_query()?;
        solver.solve(&config, &history).map(SolveResponse::from)
    }));

    match outcome {
        Ok(result) => result.into(),
        Err(_) => {
            error!("solver panicked while handling request");
            Reply::Failed(SolverError::Internal("An unexpected error occurred".into()).into())
        }
    }
}

/// Parse a JSON request, solve it and return the JSON reply
///
/// Malformed JSON is an `INVALID_ARGUMENT` reply, not an `Err`.
pub fn solve_json<L: DictionaryLoader>(solver: &Solver<'_, L>, input: &str) -> String {
    let reply = match serde_json::from_str::<SolveRequest>(input) {
        Ok(request) => handle_request(solver, request),
        Err(e) => Reply::Failed(SolverError::invalid(format!("Malformed request: {e}")).into()),
    };

    serde_json::to_string(&reply).unwrap_or_else(|e| {
        error!(error = %e, "failed to serialize reply");
        r#"{"error":"INTERNAL_ERROR","message":"An unexpected error occurred"}"#.to_string()
    })
}
