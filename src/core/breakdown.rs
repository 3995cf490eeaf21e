use std::collections::HashSet;

use crate::core::factors::{conflicting_values, normalize_tag, normalized_set, FactorScores};
use crate::models::{
    CompatibilityBreakdown, DetailedBreakdown, ExperienceBreakdown, GoalBreakdown, Profile,
    SkillBreakdown, ValueBreakdown,
};

/// Items whose normalized key is in `other`, keeping the original spelling
/// and dropping duplicates
fn shared_with(items: &[String], other: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| {
            let key = normalize_tag(item);
            !key.is_empty() && other.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect()
}

/// Items whose normalized key is NOT in `other`
fn distinct_from(items: &[String], other: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| {
            let key = normalize_tag(item);
            !key.is_empty() && !other.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect()
}

/// Derive the structured set breakdown for a requester/candidate pair.
/// Directional: `complementary` is what the candidate brings that the
/// requester lacks, `missing` the reverse.
pub fn build_breakdown(requester: &Profile, candidate: &Profile) -> CompatibilityBreakdown {
    let requester_skills = normalized_set(&requester.skills);
    let candidate_skills = normalized_set(&candidate.skills);
    let candidate_values = normalized_set(&candidate.values);
    let requester_goals = normalized_set(&requester.goals);
    let candidate_goals = normalized_set(&candidate.goals);

    let mut strengths = requester.skills.clone();
    strengths.extend(distinct_from(&candidate.skills, &requester_skills));

    let mut different_goals = distinct_from(&requester.goals, &candidate_goals);
    different_goals.extend(distinct_from(&candidate.goals, &requester_goals));

    CompatibilityBreakdown {
        skills: SkillBreakdown {
            complementary: distinct_from(&candidate.skills, &requester_skills),
            overlapping: shared_with(&requester.skills, &candidate_skills),
            missing: distinct_from(&requester.skills, &candidate_skills),
        },
        values: ValueBreakdown {
            aligned: shared_with(&requester.values, &candidate_values),
            conflicting: conflicting_values(requester, candidate),
        },
        goals: GoalBreakdown {
            shared: shared_with(&requester.goals, &candidate_goals),
            different: different_goals,
        },
        experience: ExperienceBreakdown {
            strengths,
            // Reserved for critical-skill-gap analysis
            gaps: Vec::new(),
        },
    }
}

/// Generate the ordered rationale strings. Each factor contributes at most
/// one line, and only above its own threshold.
pub fn match_reasons(scores: &FactorScores, breakdown: &CompatibilityBreakdown) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.skill_fit > 0.7 {
        reasons.push(format!(
            "Strong skill complementarity with {} complementary skills",
            breakdown.skills.complementary.len()
        ));
    }

    if scores.value_alignment > 0.7 {
        let shown: Vec<_> = breakdown.values.aligned.iter().take(3).cloned().collect();
        reasons.push(format!("Shared values: {}", shown.join(", ")));
    }

    if scores.goal_alignment > 0.7 {
        let shown: Vec<_> = breakdown.goals.shared.iter().take(2).cloned().collect();
        reasons.push(format!("Aligned goals: {}", shown.join(", ")));
    }

    if scores.experience_fit > 0.8 {
        reasons.push("Complementary experience levels".to_string());
    }

    if scores.availability_match > 0.8 {
        reasons.push("Compatible availability".to_string());
    }

    reasons
}

#[inline]
fn to_percent(score: f64) -> u8 {
    (score * 100.0).round() as u8
}

/// The seven primary factor scores as display percentages
pub fn detailed_breakdown(scores: &FactorScores) -> DetailedBreakdown {
    DetailedBreakdown {
        skill_fit: to_percent(scores.skill_fit),
        value_alignment: to_percent(scores.value_alignment),
        goal_alignment: to_percent(scores.goal_alignment),
        experience_fit: to_percent(scores.experience_fit),
        availability_match: to_percent(scores.availability_match),
        location_compatibility: to_percent(scores.location_compatibility),
        communication_style: to_percent(scores.communication_style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, ExperienceLevel};

    fn profile(id: &str, skills: &[&str], values: &[&str], goals: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Founder {}", id),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            values: values.iter().map(|s| s.to_string()).collect(),
            goals: goals.iter().map(|s| s.to_string()).collect(),
            experience: ExperienceLevel::Intermediate,
            availability: Availability::FullTime,
            location: "Berlin".to_string(),
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

    #[test]
    fn test_skill_breakdown_sets() {
        let requester = profile("a", &["React", "Node"], &[], &[]);
        let candidate = profile("b", &["node", "Design", "Marketing"], &[], &[]);

        let breakdown = build_breakdown(&requester, &candidate);

        assert_eq!(breakdown.skills.complementary, vec!["Design", "Marketing"]);
        assert_eq!(breakdown.skills.overlapping, vec!["Node"]);
        assert_eq!(breakdown.skills.missing, vec!["React"]);
    }

    #[test]
    fn test_goal_breakdown_symmetric_difference() {
        let requester = profile("a", &[], &[], &["Growth", "Exit"]);
        let candidate = profile("b", &[], &[], &["Growth", "Lifestyle"]);

        let breakdown = build_breakdown(&requester, &candidate);

        assert_eq!(breakdown.goals.shared, vec!["Growth"]);
        assert_eq!(breakdown.goals.different, vec!["Exit", "Lifestyle"]);
    }

    #[test]
    fn test_strengths_union_without_duplicates() {
        let requester = profile("a", &["Rust", "Sales"], &[], &[]);
        let candidate = profile("b", &["rust", "Design"], &[], &[]);

        let breakdown = build_breakdown(&requester, &candidate);

        assert_eq!(breakdown.experience.strengths, vec!["Rust", "Sales", "Design"]);
        assert!(breakdown.experience.gaps.is_empty());
    }

    #[test]
    fn test_conflicting_values_hook_is_empty() {
        let requester = profile("a", &[], &["Speed"], &[]);
        let candidate = profile("b", &[], &["Caution"], &[]);

        let breakdown = build_breakdown(&requester, &candidate);
        assert!(breakdown.values.conflicting.is_empty());
    }

    #[test]
    fn test_match_reasons_order_and_thresholds() {
        let requester = profile(
            "a",
            &["React", "Node"],
            &["Innovation"],
            &["Growth"],
        );
        let candidate = profile(
            "b",
            &["Design", "Marketing"],
            &["Innovation"],
            &["Growth"],
        );

        let scores = FactorScores::compute(&requester, &candidate);
        let breakdown = build_breakdown(&requester, &candidate);
        let reasons = match_reasons(&scores, &breakdown);

        // skill_fit 0.6 stays below its 0.7 threshold; values and goals are
        // fully aligned; identical experience (0.7) misses its 0.8 bar;
        // full-time + full-time availability clears it.
        assert_eq!(
            reasons,
            vec![
                "Shared values: Innovation".to_string(),
                "Aligned goals: Growth".to_string(),
                "Compatible availability".to_string(),
            ]
        );
    }

    #[test]
    fn test_reason_counts_complementary_skills() {
        let scores = FactorScores {
            skill_fit: 0.9,
            ..FactorScores::default()
        };

        let requester = profile("a", &["React"], &[], &[]);
        let candidate = profile("b", &["Design", "Marketing", "Finance"], &[], &[]);
        let breakdown = build_breakdown(&requester, &candidate);

        let reasons = match_reasons(&scores, &breakdown);
        assert_eq!(
            reasons,
            vec!["Strong skill complementarity with 3 complementary skills".to_string()]
        );
    }

    #[test]
    fn test_detailed_breakdown_percentages() {
        let scores = FactorScores {
            skill_fit: 0.6,
            value_alignment: 1.0,
            goal_alignment: 0.333,
            experience_fit: 0.7,
            availability_match: 1.0,
            location_compatibility: 0.1,
            communication_style: 0.9,
            ..FactorScores::default()
        };

        let detail = detailed_breakdown(&scores);
        assert_eq!(detail.skill_fit, 60);
        assert_eq!(detail.value_alignment, 100);
        assert_eq!(detail.goal_alignment, 33);
        assert_eq!(detail.experience_fit, 70);
        assert_eq!(detail.availability_match, 100);
        assert_eq!(detail.location_compatibility, 10);
        assert_eq!(detail.communication_style, 90);
    }
}
