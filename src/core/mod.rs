// Core algorithm exports
pub mod breakdown;
pub mod factors;
pub mod filters;
pub mod matcher;
pub mod regions;

pub use breakdown::{build_breakdown, detailed_breakdown, match_reasons};
pub use factors::{conflicting_values, FactorScores};
pub use filters::matches_filters;
pub use matcher::{MatchOutcome, Matcher};
