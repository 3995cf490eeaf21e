//! Cofoundr Algo - co-founder compatibility matching service
//!
//! This library provides the compatibility engine used by the Cofoundr
//! platform: a deterministic, rules-based pipeline that scores profile
//! pairs across eleven weighted factors, explains each match, and returns
//! a filtered, ranked candidate list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{FactorScores, MatchOutcome, Matcher};
pub use models::{
    MatchFilters, MatchQuality, MatchResult, Profile, ScoringWeights,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let _matcher = Matcher::with_default_weights();
        let weights = ScoringWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }
}
