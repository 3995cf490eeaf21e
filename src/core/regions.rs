//! Static location lookup tables for the location-compatibility scorer.
//!
//! Profiles carry free-text locations ("Singapore", "Berlin, Germany",
//! "Remote"), so comparison happens on normalized city keys and a read-only
//! city -> broad-region membership table rather than coordinates.

/// Broad region membership for major startup hubs. Keys are matched against
/// normalized city keys by substring containment.
const REGIONS: &[(&str, &[&str])] = &[
    (
        "north-america",
        &[
            "new york", "san francisco", "bay area", "los angeles", "seattle", "austin",
            "boston", "chicago", "denver", "miami", "atlanta", "toronto", "vancouver",
            "montreal",
        ],
    ),
    (
        "europe",
        &[
            "london", "berlin", "paris", "amsterdam", "stockholm", "dublin", "madrid",
            "barcelona", "lisbon", "munich", "zurich", "copenhagen", "helsinki", "warsaw",
            "prague", "vienna",
        ],
    ),
    (
        "southeast-asia",
        &[
            "singapore", "jakarta", "bangkok", "kuala lumpur", "ho chi minh city", "hanoi",
            "manila",
        ],
    ),
    (
        "east-asia",
        &[
            "tokyo", "osaka", "seoul", "beijing", "shanghai", "shenzhen", "hong kong",
            "taipei",
        ],
    ),
    (
        "south-asia",
        &[
            "bangalore", "bengaluru", "mumbai", "delhi", "gurgaon", "hyderabad", "chennai",
            "pune", "karachi", "lahore", "dhaka",
        ],
    ),
    (
        "middle-east",
        &["dubai", "abu dhabi", "tel aviv", "riyadh", "doha", "istanbul", "amman"],
    ),
    (
        "oceania",
        &["sydney", "melbourne", "brisbane", "perth", "auckland", "wellington"],
    ),
    (
        "latin-america",
        &[
            "sao paulo", "mexico city", "buenos aires", "bogota", "santiago", "lima",
            "medellin", "montevideo",
        ],
    ),
    (
        "africa",
        &["lagos", "nairobi", "cape town", "johannesburg", "cairo", "accra", "kigali"],
    ),
];

/// Lowercased, trimmed form of a raw location string
#[inline]
pub fn normalize_location(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalized city key: the segment before the first comma, stripped of
/// punctuation and collapsed whitespace. "São Paulo, Brazil" and
/// "sao paulo" resolve to comparable keys for ASCII inputs.
pub fn city_key(raw: &str) -> String {
    normalize_location(raw)
        .split(',')
        .next()
        .unwrap_or("")
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up the broad region a city key belongs to, if any. The region name
/// itself also matches, so "Europe" resolves to the europe region.
pub fn region_of(key: &str) -> Option<&'static str> {
    if key.is_empty() {
        return None;
    }

    for (region, cities) in REGIONS {
        if key.contains(&region.replace('-', " ")) {
            return Some(region);
        }
        if cities.iter().any(|city| key.contains(city)) {
            return Some(region);
        }
    }

    None
}

/// Whether a raw location mentions remote work
#[inline]
pub fn mentions_remote(raw: &str) -> bool {
    normalize_location(raw).contains("remote")
}
