// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, CompatibilityBreakdown, DetailedBreakdown, ExperienceBreakdown, ExperienceLevel,
    GoalBreakdown, IdeaPreference, MatchFilters, MatchQuality, MatchResult, Profile, ScoringWeights,
    SkillBreakdown, StartupIdeaStatus, TechnicalPreference, ValueBreakdown,
};
pub use requests::{CompatibilityRequest, FindMatchesRequest};
pub use responses::{CompatibilityResponse, ErrorResponse, FindMatchesResponse, HealthResponse};
