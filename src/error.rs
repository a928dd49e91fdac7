//! Error taxonomy for solve requests

use crate::core::{PatternError, WordError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    DictionaryNotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl SolverError {
    /// Stable wire code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::DictionaryNotFound(_) => "DICTIONARY_NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::DictionaryNotFound(message.into())
    }
}

impl From<WordError> for SolverError {
    fn from(e: WordError) -> Self {
        Self::InvalidArgument(e.to_string())
    }
}

impl From<PatternError> for SolverError {
    fn from(e: PatternError) -> Self {
        Self::InvalidArgument(e.to_string())
    }
}

pub type SolverResult<T> = Result<T, SolverError>;
