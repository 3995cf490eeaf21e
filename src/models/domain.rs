use serde::{Deserialize, Serialize};

/// Co-founder profile with the attributes used for matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    pub experience: ExperienceLevel,
    pub availability: Availability,
    pub location: String,
    #[serde(default)]
    pub timezone: Option<String>,
    pub communication: String,
    #[serde(rename = "startupIdeaStatus", default)]
    pub startup_idea_status: Option<StartupIdeaStatus>,
    #[serde(rename = "fullTimeTiming", default)]
    pub full_time_timing: Option<String>,
    #[serde(rename = "responsibilityAreas", default)]
    pub responsibility_areas: Option<Vec<String>>,
    #[serde(rename = "preferredResponsibilityAreas", default)]
    pub preferred_responsibility_areas: Option<Vec<String>>,
    #[serde(rename = "ideaPreference", default)]
    pub idea_preference: Option<IdeaPreference>,
    #[serde(rename = "technicalPreference", default)]
    pub technical_preference: Option<TechnicalPreference>,
    #[serde(rename = "technicalStatus", default)]
    pub technical_status: Option<bool>,
    #[serde(default)]
    pub industry: Vec<String>,
    #[serde(default)]
    pub commitment: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Self-reported experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    /// Ordinal rank used by the experience-fit scorer
    pub fn rank(&self) -> u8 {
        match self {
            ExperienceLevel::Beginner => 1,
            ExperienceLevel::Intermediate => 2,
            ExperienceLevel::Expert => 3,
        }
    }
}

/// Weekly availability for founder work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    FullTime,
    PartTime,
    Weekends,
}

/// Where the person stands on their startup idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartupIdeaStatus {
    Committed,
    Exploring,
    HelpExisting,
}

/// Whether they want to join a specific idea or stay open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaPreference {
    Specific,
    Open,
    NoPreference,
}

/// Preferred technical profile of a co-founder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechnicalPreference {
    Technical,
    NonTechnical,
    NoPreference,
}

/// Discrete match-quality tier derived from the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchQuality {
    /// Classify a raw aggregate in [0,1]. Thresholds apply before the score
    /// is rounded for display.
    pub fn from_aggregate(aggregate: f64) -> Self {
        if aggregate >= 0.90 {
            MatchQuality::Excellent
        } else if aggregate >= 0.70 {
            MatchQuality::Good
        } else if aggregate >= 0.50 {
            MatchQuality::Fair
        } else {
            MatchQuality::Poor
        }
    }
}

/// Candidate-pool filters. Every field is optional; omitted or empty
/// filters are no-ops, supplied filters combine with AND semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(rename = "minCompatibility", alias = "minScore", default)]
    pub min_compatibility: Option<u8>,
    #[serde(default)]
    pub location: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceLevel>>,
    #[serde(default)]
    pub availability: Option<Vec<Availability>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub values: Option<Vec<String>>,
    #[serde(default)]
    pub industry: Option<Vec<String>>,
    #[serde(default)]
    pub commitment: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub timezone: Option<Vec<String>>,
}

/// Skill set relationships between requester and candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub complementary: Vec<String>,
    pub overlapping: Vec<String>,
    pub missing: Vec<String>,
}

/// Value alignment detail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueBreakdown {
    pub aligned: Vec<String>,
    pub conflicting: Vec<String>,
}

/// Goal alignment detail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalBreakdown {
    pub shared: Vec<String>,
    pub different: Vec<String>,
}

/// Combined team strengths and open gaps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceBreakdown {
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

/// Structured set-operation breakdown exposed for UI explanation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub skills: SkillBreakdown,
    pub values: ValueBreakdown,
    pub goals: GoalBreakdown,
    pub experience: ExperienceBreakdown,
}

/// The seven primary per-factor percentages for UI display
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailedBreakdown {
    #[serde(rename = "skillFit")]
    pub skill_fit: u8,
    #[serde(rename = "valueAlignment")]
    pub value_alignment: u8,
    #[serde(rename = "goalAlignment")]
    pub goal_alignment: u8,
    #[serde(rename = "experienceFit")]
    pub experience_fit: u8,
    #[serde(rename = "availabilityMatch")]
    pub availability_match: u8,
    #[serde(rename = "locationCompatibility")]
    pub location_compatibility: u8,
    #[serde(rename = "communicationStyle")]
    pub communication_style: u8,
}

/// One scored candidate, recomputed on every matching request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate: Profile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "matchQuality")]
    pub match_quality: MatchQuality,
    pub breakdown: CompatibilityBreakdown,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "detailedBreakdown")]
    pub detailed_breakdown: DetailedBreakdown,
}

/// Per-factor weights. The defaults sum to 1.0 exactly.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill_fit: f64,
    pub value_alignment: f64,
    pub goal_alignment: f64,
    pub experience_fit: f64,
    pub availability_match: f64,
    pub location_compatibility: f64,
    pub communication_style: f64,
    pub startup_status: f64,
    pub timing: f64,
    pub responsibility: f64,
    pub preference: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill_fit
            + self.value_alignment
            + self.goal_alignment
            + self.experience_fit
            + self.availability_match
            + self.location_compatibility
            + self.communication_style
            + self.startup_status
            + self.timing
            + self.responsibility
            + self.preference
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_fit: 0.20,
            value_alignment: 0.15,
            goal_alignment: 0.15,
            experience_fit: 0.12,
            availability_match: 0.08,
            location_compatibility: 0.05,
            communication_style: 0.05,
            startup_status: 0.10,
            timing: 0.05,
            responsibility: 0.03,
            preference: 0.02,
        }
    }
}
