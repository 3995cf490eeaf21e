use std::collections::HashSet;

use crate::core::breakdown::{build_breakdown, detailed_breakdown, match_reasons};
use crate::core::factors::FactorScores;
use crate::core::filters::matches_filters;
use crate::models::{MatchFilters, MatchQuality, MatchResult, Profile, ScoringWeights};

/// Result of a pool-matching request
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline
/// 1. Self-exclusion and dedup by candidate id
/// 2. Candidate-pool filter predicates (AND)
/// 3. Per-candidate compatibility scoring
/// 4. Minimum-score threshold and descending stable sort
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Compute the full compatibility result for one candidate, without any
    /// pool filtering. Backs the "why this match" detail view.
    pub fn calculate_compatibility(&self, requester: &Profile, candidate: &Profile) -> MatchResult {
        let scores = FactorScores::compute(requester, candidate);
        let aggregate = scores.aggregate(&self.weights);

        // Quality is classified on the raw aggregate, before display rounding
        let match_quality = MatchQuality::from_aggregate(aggregate);
        let breakdown = build_breakdown(requester, candidate);
        let reasons = match_reasons(&scores, &breakdown);

        MatchResult {
            candidate: candidate.clone(),
            compatibility_score: (aggregate * 100.0).round() as u8,
            match_quality,
            match_reasons: reasons,
            detailed_breakdown: detailed_breakdown(&scores),
            breakdown,
        }
    }

    /// Find co-founder matches for a requester across a candidate pool.
    ///
    /// Returns the full ordered list; pagination is the caller's concern.
    /// Ties keep pool order (stable sort, no secondary tie-break).
    pub fn match_profiles(
        &self,
        requester: &Profile,
        candidates: Vec<Profile>,
        filters: &MatchFilters,
    ) -> MatchOutcome {
        let total_candidates = candidates.len();
        let min_score = filters.min_compatibility.unwrap_or(0);

        let mut seen_ids: HashSet<String> = HashSet::new();

        let mut matches: Vec<MatchResult> = candidates
            .into_iter()
            // Never match someone with themselves, even if the pool
            // contains the requester
            .filter(|candidate| candidate.id != requester.id)
            // First occurrence wins when the pool has duplicate entries
            .filter(|candidate| seen_ids.insert(candidate.id.clone()))
            .filter(|candidate| matches_filters(candidate, filters))
            .map(|candidate| self.calculate_compatibility(requester, &candidate))
            .filter(|result| result.compatibility_score >= min_score)
            .collect();

        matches.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        MatchOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
