use std::collections::HashSet;

use crate::core::regions;
use crate::models::{
    Availability, IdeaPreference, Profile, ScoringWeights, StartupIdeaStatus,
    TechnicalPreference,
};

/// Normalized comparison key for free-text tags (skills, values, goals,
/// responsibility areas)
#[inline]
pub(crate) fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Build the normalized key set for a list of free-text tags, dropping
/// empty entries
pub(crate) fn normalized_set(items: &[String]) -> HashSet<String> {
    items
        .iter()
        .map(|s| normalize_tag(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// All eleven factor scores for one profile pair, each in [0,1]
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorScores {
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

impl FactorScores {
    /// Run every factor scorer over a profile pair. Scoring never mutates
    /// either profile and depends only on the two inputs.
    pub fn compute(a: &Profile, b: &Profile) -> Self {
        Self {
            skill_fit: skill_complementarity(a, b),
            value_alignment: value_alignment(a, b),
            goal_alignment: goal_alignment(a, b),
            experience_fit: experience_fit(a, b),
            availability_match: availability_match(a, b),
            location_compatibility: location_compatibility(a, b),
            communication_style: communication_style(a, b),
            startup_status: startup_status_match(a, b),
            timing: timing_match(a, b),
            responsibility: responsibility_match(a, b),
            preference: preference_alignment(a, b),
        }
    }

    /// Weighted aggregate in [0,1]
    pub fn aggregate(&self, weights: &ScoringWeights) -> f64 {
        let total = self.skill_fit * weights.skill_fit
            + self.value_alignment * weights.value_alignment
            + self.goal_alignment * weights.goal_alignment
            + self.experience_fit * weights.experience_fit
            + self.availability_match * weights.availability_match
            + self.location_compatibility * weights.location_compatibility
            + self.communication_style * weights.communication_style
            + self.startup_status * weights.startup_status
            + self.timing * weights.timing
            + self.responsibility * weights.responsibility
            + self.preference * weights.preference;

        total.clamp(0.0, 1.0)
    }
}

/// Shared overlap + complementarity formula for skills and responsibility
/// areas. A moderate overlap (shared vocabulary) saturates at 40% of the
/// score, strong complementarity (covering each other's gaps) at 60%.
fn overlap_complementarity(a_items: &[String], b_items: &[String]) -> f64 {
    let a = normalized_set(a_items);
    let b = normalized_set(b_items);

    let overlap_count = a.intersection(&b).count() as f64;
    let larger = a.len().max(b.len()).max(1) as f64;
    let overlap = overlap_count / larger;

    let distinct = (a.difference(&b).count() + b.difference(&a).count()) as f64;
    let combined = (a.len() + b.len()).max(1) as f64;
    let complementarity = distinct / combined;

    (overlap / 0.4).min(1.0) * 0.4 + (complementarity / 0.6).min(1.0) * 0.6
}

/// Skill complementarity (weight 0.20)
pub fn skill_complementarity(a: &Profile, b: &Profile) -> f64 {
    overlap_complementarity(&a.skills, &b.skills)
}

/// Conflict-detection hook for stated values. No conflict table is shipped;
/// every pair of values is treated as non-conflicting.
pub fn conflicting_values(_a: &Profile, _b: &Profile) -> Vec<String> {
    Vec::new()
}

/// Value alignment (weight 0.15): shared-value ratio minus a 0.2 penalty
/// per conflicting value from the conflict hook
pub fn value_alignment(a: &Profile, b: &Profile) -> f64 {
    let a_values = normalized_set(&a.values);
    let b_values = normalized_set(&b.values);

    let aligned = a_values.intersection(&b_values).count() as f64;
    let larger = a_values.len().max(b_values.len()).max(1) as f64;
    let conflicts = conflicting_values(a, b).len() as f64;

    (aligned / larger - 0.2 * conflicts).clamp(0.0, 1.0)
}

/// Goal alignment (weight 0.15): shared-goal ratio
pub fn goal_alignment(a: &Profile, b: &Profile) -> f64 {
    let a_goals = normalized_set(&a.goals);
    let b_goals = normalized_set(&b.goals);

    let shared = a_goals.intersection(&b_goals).count() as f64;
    let larger = a_goals.len().max(b_goals.len()).max(1) as f64;

    (shared / larger).min(1.0)
}

/// Experience fit (weight 0.12). A one-level gap scores highest:
/// complementary seniority beats identical seniority.
pub fn experience_fit(a: &Profile, b: &Profile) -> f64 {
    let diff = a.experience.rank().abs_diff(b.experience.rank());
    match diff {
        0 => 0.7,
        1 => 1.0,
        _ => 0.5,
    }
}

#[inline]
fn availability_weight(availability: Availability) -> f64 {
    match availability {
        Availability::FullTime => 1.0,
        Availability::PartTime => 0.6,
        Availability::Weekends => 0.3,
    }
}

/// Availability match (weight 0.08)
pub fn availability_match(a: &Profile, b: &Profile) -> f64 {
    use Availability::*;

    match (a.availability, b.availability) {
        (FullTime, FullTime) => 1.0,
        (FullTime, PartTime) | (PartTime, FullTime) => 0.6,
        (Weekends, _) | (_, Weekends) => 0.3,
        (x, y) => (availability_weight(x) + availability_weight(y)) / 2.0,
    }
}

/// Location compatibility (weight 0.05), tiered from exact match down to
/// a remote mention
pub fn location_compatibility(a: &Profile, b: &Profile) -> f64 {
    let a_loc = regions::normalize_location(&a.location);
    let b_loc = regions::normalize_location(&b.location);
    if !a_loc.is_empty() && a_loc == b_loc {
        return 1.0;
    }

    let a_key = regions::city_key(&a.location);
    let b_key = regions::city_key(&b.location);
    if !a_key.is_empty() && a_key == b_key {
        return 0.8;
    }

    if let (Some(a_region), Some(b_region)) = (regions::region_of(&a_key), regions::region_of(&b_key)) {
        if a_region == b_region {
            return 0.6;
        }
    }

    if let (Some(a_tz), Some(b_tz)) = (a.timezone.as_deref(), b.timezone.as_deref()) {
        let a_tz = a_tz.trim();
        if !a_tz.is_empty() && a_tz.eq_ignore_ascii_case(b_tz.trim()) {
            return 0.4;
        }
    }

    if regions::mentions_remote(&a.location) || regions::mentions_remote(&b.location) {
        return 0.3;
    }

    0.1
}

/// Style pairs that tend to balance each other on a founding team
const COMPLEMENTARY_STYLES: &[(&str, &str)] = &[
    ("direct", "diplomatic"),
    ("analytical", "creative"),
];

/// Communication style (weight 0.05): complementary pairs beat identical
/// styles, anything else is neutral-ish
pub fn communication_style(a: &Profile, b: &Profile) -> f64 {
    let a_style = normalize_tag(&a.communication);
    let b_style = normalize_tag(&b.communication);

    let complementary = COMPLEMENTARY_STYLES.iter().any(|(x, y)| {
        (a_style == *x && b_style == *y) || (a_style == *y && b_style == *x)
    });

    if complementary {
        0.9
    } else if !a_style.is_empty() && a_style == b_style {
        0.7
    } else {
        0.5
    }
}

/// Startup-status match (weight 0.10): lookup table over the 3x3 status
/// combinations. A committed founder pairs best with someone exploring or
/// looking to join.
pub fn startup_status_match(a: &Profile, b: &Profile) -> f64 {
    use StartupIdeaStatus::*;

    match (a.startup_idea_status, b.startup_idea_status) {
        (Some(x), Some(y)) => match (x, y) {
            (Committed, Committed) => 0.8,
            (Committed, Exploring) | (Exploring, Committed) => 1.0,
            (Exploring, Exploring) => 0.9,
            (HelpExisting, Committed) | (Committed, HelpExisting) => 1.0,
            (HelpExisting, Exploring) | (Exploring, HelpExisting) => 0.8,
            (HelpExisting, HelpExisting) => 0.6,
        },
        _ => 0.5,
    }
}

/// Timing match (weight 0.05): substring checks over the loosely structured
/// full-time-timing answer
pub fn timing_match(a: &Profile, b: &Profile) -> f64 {
    let (Some(a_raw), Some(b_raw)) = (a.full_time_timing.as_deref(), b.full_time_timing.as_deref())
    else {
        return 0.5;
    };

    let a_text = a_raw.to_lowercase();
    let b_text = b_raw.to_lowercase();

    let is_now =
        |t: &str| t.contains("already full-time") || t.contains("ready to go full-time");
    let a_now = is_now(&a_text);
    let b_now = is_now(&b_text);
    let a_next_year = a_text.contains("next year");
    let b_next_year = b_text.contains("next year");

    if a_now && b_now {
        return 1.0;
    }
    if a_next_year && b_next_year {
        return 0.8;
    }
    if (a_now && b_next_year) || (a_next_year && b_now) {
        return 0.7;
    }
    if a_text.contains("no specific plans") || b_text.contains("no specific plans") {
        return 0.4;
    }

    0.5
}

/// Responsibility match (weight 0.03): the skill overlap+complementarity
/// formula applied to actual responsibility areas
pub fn responsibility_match(a: &Profile, b: &Profile) -> f64 {
    match (a.responsibility_areas.as_deref(), b.responsibility_areas.as_deref()) {
        (Some(a_areas), Some(b_areas)) if !a_areas.is_empty() && !b_areas.is_empty() => {
            overlap_complementarity(a_areas, b_areas)
        }
        _ => 0.5,
    }
}

fn idea_preference_score(a: IdeaPreference, b: IdeaPreference) -> f64 {
    use IdeaPreference::*;

    match (a, b) {
        (NoPreference, _) | (_, NoPreference) => 1.0,
        (x, y) if x == y => 1.0,
        (Specific, Open) | (Open, Specific) => 0.7,
        _ => 0.3,
    }
}

fn technical_preference_score(pref: TechnicalPreference, other_is_technical: bool) -> f64 {
    use TechnicalPreference::*;

    match (pref, other_is_technical) {
        (NoPreference, _) => 1.0,
        (Technical, true) | (NonTechnical, false) => 1.0,
        _ => 0.2,
    }
}

/// Share of `wanted` responsibility areas covered by the other side's
/// `actual` areas. None when the wanted list is effectively empty.
fn coverage_ratio(wanted: &[String], actual: &[String]) -> Option<f64> {
    let wanted_set = normalized_set(wanted);
    if wanted_set.is_empty() {
        return None;
    }

    let actual_set = normalized_set(actual);
    let satisfied = wanted_set.intersection(&actual_set).count() as f64;
    Some(satisfied / wanted_set.len() as f64)
}

/// Preference alignment (weight 0.02): average of up to three sub-checks,
/// each counted only when both sides supplied the data it needs. With no
/// evaluable sub-check the factor is neutral.
pub fn preference_alignment(a: &Profile, b: &Profile) -> f64 {
    let mut total = 0.0;
    let mut checks = 0u32;

    if let (Some(a_pref), Some(b_pref)) = (a.idea_preference, b.idea_preference) {
        total += idea_preference_score(a_pref, b_pref);
        checks += 1;
    }

    if let (Some(pref), Some(is_technical)) = (a.technical_preference, b.technical_status) {
        total += technical_preference_score(pref, is_technical);
        checks += 1;
    }

    let mut ratios = Vec::new();
    if let (Some(wanted), Some(actual)) = (
        a.preferred_responsibility_areas.as_deref(),
        b.responsibility_areas.as_deref(),
    ) {
        if let Some(ratio) = coverage_ratio(wanted, actual) {
            ratios.push(ratio);
        }
    }
    if let (Some(wanted), Some(actual)) = (
        b.preferred_responsibility_areas.as_deref(),
        a.responsibility_areas.as_deref(),
    ) {
        if let Some(ratio) = coverage_ratio(wanted, actual) {
            ratios.push(ratio);
        }
    }
    if !ratios.is_empty() {
        total += ratios.iter().sum::<f64>() / ratios.len() as f64;
        checks += 1;
    }

    if checks == 0 {
        0.5
    } else {
        total / f64::from(checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Founder {}", id),
            skills: vec![],
            values: vec![],
            goals: vec![],
            experience: ExperienceLevel::Intermediate,
            availability: Availability::FullTime,
            location: "Singapore".to_string(),
            timezone: None,
            communication: "direct".to_string(),
            startup_idea_status: None,
            full_time_timing: None,
            responsibility_areas: None,
            preferred_responsibility_areas: None,
            idea_preference: None,
            technical_preference: None,
            technical_status: None,
            industry: vec![],
            commitment: None,
            languages: vec![],
            created_at: None,
        }
    }

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skill_fit_rewards_complementarity() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.skills = tags(&["React", "Node"]);
        b.skills = tags(&["Design", "Marketing"]);

        // Zero overlap, full complementarity: the 0.6 term saturates
        let score = skill_complementarity(&a, &b);
        assert!((score - 0.6).abs() < 1e-9, "expected 0.6, got {}", score);

        // Identical sets: overlap term saturates, complementarity is zero
        b.skills = a.skills.clone();
        let duplicate = skill_complementarity(&a, &b);
        assert!((duplicate - 0.4).abs() < 1e-9, "expected 0.4, got {}", duplicate);
    }

    #[test]
    fn test_skill_fit_symmetric() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.skills = tags(&["Rust", "Sales", "Product"]);
        b.skills = tags(&["rust", "Design"]);

        assert_eq!(skill_complementarity(&a, &b), skill_complementarity(&b, &a));
    }

    #[test]
    fn test_skill_fit_empty_sets_score_zero() {
        let a = profile("a");
        let b = profile("b");
        assert_eq!(skill_complementarity(&a, &b), 0.0);
    }

    #[test]
    fn test_value_alignment_full_overlap() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.values = tags(&["Innovation", "Transparency"]);
        b.values = tags(&["innovation", "transparency"]);

        assert_eq!(value_alignment(&a, &b), 1.0);
    }

    #[test]
    fn test_value_alignment_partial() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.values = tags(&["Innovation", "Speed"]);
        b.values = tags(&["Innovation", "Stability", "Craft"]);

        let score = value_alignment(&a, &b);
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_alignment_bounds() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.goals = tags(&["Growth"]);
        b.goals = tags(&["Growth"]);
        assert_eq!(goal_alignment(&a, &b), 1.0);

        b.goals = tags(&["Lifestyle"]);
        assert_eq!(goal_alignment(&a, &b), 0.0);
    }

    #[test]
    fn test_experience_fit_table() {
        let mut a = profile("a");
        let mut b = profile("b");

        a.experience = ExperienceLevel::Intermediate;
        b.experience = ExperienceLevel::Intermediate;
        assert_eq!(experience_fit(&a, &b), 0.7);

        b.experience = ExperienceLevel::Expert;
        assert_eq!(experience_fit(&a, &b), 1.0);

        a.experience = ExperienceLevel::Beginner;
        assert_eq!(experience_fit(&a, &b), 0.5);
    }

    #[test]
    fn test_availability_table() {
        let mut a = profile("a");
        let mut b = profile("b");

        assert_eq!(availability_match(&a, &b), 1.0);

        b.availability = Availability::PartTime;
        assert_eq!(availability_match(&a, &b), 0.6);
        assert_eq!(availability_match(&b, &a), 0.6);

        b.availability = Availability::Weekends;
        assert_eq!(availability_match(&a, &b), 0.3);

        a.availability = Availability::PartTime;
        b.availability = Availability::PartTime;
        assert_eq!(availability_match(&a, &b), 0.6);
    }

    #[test]
    fn test_location_tiers() {
        let mut a = profile("a");
        let mut b = profile("b");

        // Exact match
        assert_eq!(location_compatibility(&a, &b), 1.0);

        // Same city key after normalization
        b.location = "singapore, Singapore".to_string();
        assert_eq!(location_compatibility(&a, &b), 0.8);

        // Same broad region
        b.location = "Bangkok".to_string();
        assert_eq!(location_compatibility(&a, &b), 0.6);

        // Shared timezone only
        a.location = "Lisbon".to_string();
        b.location = "Casablanca".to_string();
        a.timezone = Some("UTC+0".to_string());
        b.timezone = Some("utc+0".to_string());
        assert_eq!(location_compatibility(&a, &b), 0.4);

        // Remote mention
        a.timezone = None;
        b.timezone = None;
        b.location = "Remote".to_string();
        assert_eq!(location_compatibility(&a, &b), 0.3);

        // Nothing in common
        b.location = "Ulaanbaatar".to_string();
        assert_eq!(location_compatibility(&a, &b), 0.1);
    }

    #[test]
    fn test_communication_style_pairs() {
        let mut a = profile("a");
        let mut b = profile("b");

        a.communication = "direct".to_string();
        b.communication = "Diplomatic".to_string();
        assert_eq!(communication_style(&a, &b), 0.9);

        b.communication = "direct".to_string();
        assert_eq!(communication_style(&a, &b), 0.7);

        b.communication = "creative".to_string();
        assert_eq!(communication_style(&a, &b), 0.5);
    }

    #[test]
    fn test_startup_status_table_symmetric() {
        use StartupIdeaStatus::*;

        let combos = [
            (Committed, Committed, 0.8),
            (Committed, Exploring, 1.0),
            (Exploring, Exploring, 0.9),
            (HelpExisting, Committed, 1.0),
            (HelpExisting, Exploring, 0.8),
            (HelpExisting, HelpExisting, 0.6),
        ];

        for (x, y, expected) in combos {
            let mut a = profile("a");
            let mut b = profile("b");
            a.startup_idea_status = Some(x);
            b.startup_idea_status = Some(y);
            assert_eq!(startup_status_match(&a, &b), expected, "{:?}/{:?}", x, y);
            assert_eq!(startup_status_match(&b, &a), expected, "{:?}/{:?} reversed", y, x);
        }

        let a = profile("a");
        let mut b = profile("b");
        b.startup_idea_status = Some(Committed);
        assert_eq!(startup_status_match(&a, &b), 0.5);
    }

    #[test]
    fn test_timing_substring_rules() {
        let cases = [
            (Some("Already full-time on this"), Some("Ready to go full-time"), 1.0),
            (Some("already full-time"), Some("already full-time"), 1.0),
            (Some("Probably next year"), Some("next year at the earliest"), 0.8),
            (Some("next year"), Some("ready to go full-time"), 0.7),
            (Some("No specific plans yet"), Some("already full-time"), 0.4),
            (Some("thinking about it"), Some("already full-time"), 0.5),
            (None, Some("already full-time"), 0.5),
            (None, None, 0.5),
        ];

        for (a_timing, b_timing, expected) in cases {
            let mut a = profile("a");
            let mut b = profile("b");
            a.full_time_timing = a_timing.map(str::to_string);
            b.full_time_timing = b_timing.map(str::to_string);
            assert_eq!(timing_match(&a, &b), expected, "{:?}/{:?}", a_timing, b_timing);
            assert_eq!(timing_match(&b, &a), expected, "{:?}/{:?} reversed", b_timing, a_timing);
        }
    }

    #[test]
    fn test_responsibility_missing_is_neutral() {
        let mut a = profile("a");
        let b = profile("b");
        a.responsibility_areas = Some(tags(&["engineering"]));

        assert_eq!(responsibility_match(&a, &b), 0.5);
    }

    #[test]
    fn test_preference_alignment_no_data_is_neutral() {
        let a = profile("a");
        let b = profile("b");
        assert_eq!(preference_alignment(&a, &b), 0.5);
    }

    #[test]
    fn test_preference_alignment_technical_check() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.technical_preference = Some(TechnicalPreference::Technical);
        b.technical_status = Some(true);
        assert_eq!(preference_alignment(&a, &b), 1.0);

        b.technical_status = Some(false);
        assert_eq!(preference_alignment(&a, &b), 0.2);
    }

    #[test]
    fn test_preference_alignment_averages_subchecks() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.idea_preference = Some(IdeaPreference::Specific);
        b.idea_preference = Some(IdeaPreference::Open);
        a.technical_preference = Some(TechnicalPreference::NoPreference);
        b.technical_status = Some(false);

        // (0.7 + 1.0) / 2
        assert!((preference_alignment(&a, &b) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_preference_alignment_responsibility_coverage() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.preferred_responsibility_areas = Some(tags(&["engineering", "product"]));
        b.responsibility_areas = Some(tags(&["Engineering", "Sales"]));

        // One direction only: 1 of 2 wanted areas covered
        assert!((preference_alignment(&a, &b) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_all_factors_within_bounds() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.skills = tags(&["React", "Node"]);
        b.skills = tags(&["Design"]);
        a.values = tags(&["Innovation"]);
        b.values = tags(&["Craft"]);
        a.startup_idea_status = Some(StartupIdeaStatus::Committed);
        b.startup_idea_status = Some(StartupIdeaStatus::Exploring);

        let scores = FactorScores::compute(&a, &b);
        for (name, value) in [
            ("skill_fit", scores.skill_fit),
            ("value_alignment", scores.value_alignment),
            ("goal_alignment", scores.goal_alignment),
            ("experience_fit", scores.experience_fit),
            ("availability_match", scores.availability_match),
            ("location_compatibility", scores.location_compatibility),
            ("communication_style", scores.communication_style),
            ("startup_status", scores.startup_status),
            ("timing", scores.timing),
            ("responsibility", scores.responsibility),
            ("preference", scores.preference),
        ] {
            assert!((0.0..=1.0).contains(&value), "{} out of bounds: {}", name, value);
        }

        let aggregate = scores.aggregate(&ScoringWeights::default());
        assert!((0.0..=1.0).contains(&aggregate));
    }
}
