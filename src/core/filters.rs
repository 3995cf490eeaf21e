use crate::core::factors::{normalize_tag, normalized_set};
use crate::models::{MatchFilters, Profile};

/// Any-overlap predicate between a filter list and a profile attribute
/// list. An omitted or empty filter is a no-op.
#[inline]
fn overlaps(filter: Option<&Vec<String>>, attributes: &[String]) -> bool {
    match filter {
        Some(wanted) if !wanted.is_empty() => {
            let attribute_keys = normalized_set(attributes);
            wanted
                .iter()
                .any(|item| attribute_keys.contains(&normalize_tag(item)))
        }
        _ => true,
    }
}

/// Check if a candidate satisfies every supplied filter (AND semantics).
///
/// Free-text filters compare case-insensitively; filters whose values match
/// no candidate simply produce an empty result rather than an error.
pub fn matches_filters(profile: &Profile, filters: &MatchFilters) -> bool {
    // Location: any filter entry appearing as a substring of the
    // candidate's location
    if let Some(locations) = &filters.location {
        if !locations.is_empty() {
            let profile_location = profile.location.to_lowercase();
            let hit = locations.iter().any(|wanted| {
                let key = normalize_tag(wanted);
                !key.is_empty() && profile_location.contains(&key)
            });
            if !hit {
                return false;
            }
        }
    }

    if let Some(levels) = &filters.experience {
        if !levels.is_empty() && !levels.contains(&profile.experience) {
            return false;
        }
    }

    if let Some(availabilities) = &filters.availability {
        if !availabilities.is_empty() && !availabilities.contains(&profile.availability) {
            return false;
        }
    }

    if !overlaps(filters.skills.as_ref(), &profile.skills) {
        return false;
    }

    if !overlaps(filters.values.as_ref(), &profile.values) {
        return false;
    }

    if !overlaps(filters.industry.as_ref(), &profile.industry) {
        return false;
    }

    if let Some(commitments) = &filters.commitment {
        if !commitments.is_empty() {
            let hit = profile.commitment.as_deref().is_some_and(|commitment| {
                commitments
                    .iter()
                    .any(|wanted| normalize_tag(wanted) == normalize_tag(commitment))
            });
            if !hit {
                return false;
            }
        }
    }

    if !overlaps(filters.languages.as_ref(), &profile.languages) {
        return false;
    }

    if let Some(timezones) = &filters.timezone {
        if !timezones.is_empty() {
            let hit = profile.timezone.as_deref().is_some_and(|tz| {
                timezones
                    .iter()
                    .any(|wanted| normalize_tag(wanted) == normalize_tag(tz))
            });
            if !hit {
                return false;
            }
        }
    }

    true
}
