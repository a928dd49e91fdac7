//! Solver output limits
//!
//! Parsed from the command line via clap, with the same values as `Default`
//! for library callers.

use clap::Args;

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverSettings {
    /// Maximum number of ranked recommendations returned
    #[arg(long, default_value_t = 9)]
    pub max_recommendations: usize,

    /// Maximum number of remaining words listed (the count is never capped)
    #[arg(long, default_value_t = 100)]
    pub max_remaining_words: usize,

    /// Maximum number of filler words suggested
    #[arg(long, default_value_t = 9)]
    pub max_fillers: usize,

    /// Filler words are only suggested when more candidates than this remain
    #[arg(long, default_value_t = 10)]
    pub filler_min_candidates: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_recommendations: 9,
            max_remaining_words: 100,
            max_fillers: 9,
            filler_min_candidates: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        settings: SolverSettings,
    }

    #[test]
    fn cli_defaults_match_default_impl() {
        let parsed = Harness::parse_from(["test"]);
        assert_eq!(parsed.settings, SolverSettings::default());
    }

    #[test]
    fn cli_overrides() {
        let parsed = Harness::parse_from(["test", "--max-fillers", "3"]);
        assert_eq!(parsed.settings.max_fillers, 3);
        assert_eq!(parsed.settings.max_recommendations, 9);
    }
}
