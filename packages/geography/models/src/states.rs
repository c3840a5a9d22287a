//! US state code utilities.
//!
//! Provides mappings between two-letter state codes and full state names for
//! the 50 US states + DC, plus loose resolution of user-typed state tokens.

/// Two-letter codes for the 50 states + DC, in alphabetical order.
pub const STATE_CODES: &[&str] = &[
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL", "IN",
    "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE", "NH", "NJ",
    "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VA", "VT", "WA",
    "WI", "WV", "WY",
];

/// Alternate spellings that should resolve to a state, already normalized.
const STATE_ALIASES: &[(&str, &str)] = &[
    ("district of columbia", "DC"),
    ("washington dc", "DC"),
];

/// Shortest token accepted for prefix/substring resolution.
const MIN_FUZZY_LEN: usize = 3;

/// Maps a two-letter state code to the full state name.
///
/// Matching is case-insensitive. Returns `None` for unrecognized codes.
#[must_use]
pub fn state_name(code: &str) -> Option<&'static str> {
    let name = match code.trim().to_uppercase().as_str() {
        "AL" => "Alabama",
        "AK" => "Alaska",
        "AZ" => "Arizona",
        "AR" => "Arkansas",
        "CA" => "California",
        "CO" => "Colorado",
        "CT" => "Connecticut",
        "DE" => "Delaware",
        "DC" => "Washington D.C.",
        "FL" => "Florida",
        "GA" => "Georgia",
        "HI" => "Hawaii",
        "ID" => "Idaho",
        "IL" => "Illinois",
        "IN" => "Indiana",
        "IA" => "Iowa",
        "KS" => "Kansas",
        "KY" => "Kentucky",
        "LA" => "Louisiana",
        "ME" => "Maine",
        "MD" => "Maryland",
        "MA" => "Massachusetts",
        "MI" => "Michigan",
        "MN" => "Minnesota",
        "MS" => "Mississippi",
        "MO" => "Missouri",
        "MT" => "Montana",
        "NE" => "Nebraska",
        "NV" => "Nevada",
        "NH" => "New Hampshire",
        "NJ" => "New Jersey",
        "NM" => "New Mexico",
        "NY" => "New York",
        "NC" => "North Carolina",
        "ND" => "North Dakota",
        "OH" => "Ohio",
        "OK" => "Oklahoma",
        "OR" => "Oregon",
        "PA" => "Pennsylvania",
        "RI" => "Rhode Island",
        "SC" => "South Carolina",
        "SD" => "South Dakota",
        "TN" => "Tennessee",
        "TX" => "Texas",
        "UT" => "Utah",
        "VT" => "Vermont",
        "VA" => "Virginia",
        "WA" => "Washington",
        "WV" => "West Virginia",
        "WI" => "Wisconsin",
        "WY" => "Wyoming",
        _ => return None,
    };
    Some(name)
}

/// Lowercases, drops periods, and collapses whitespace so that
/// `"Washington D.C."` and `"washington  dc"` compare equal.
#[must_use]
pub fn normalize_state_token(input: &str) -> String {
    input
        .to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps a full state name (or a known alias) to its two-letter code.
///
/// Matching ignores case, periods, and extra whitespace.
#[must_use]
pub fn state_code_for_name(name: &str) -> Option<&'static str> {
    let wanted = normalize_state_token(name);
    if wanted.is_empty() {
        return None;
    }

    STATE_CODES
        .iter()
        .copied()
        .find(|code| state_name(code).is_some_and(|n| normalize_state_token(n) == wanted))
        .or_else(|| {
            STATE_ALIASES
                .iter()
                .find(|(alias, _)| *alias == wanted)
                .map(|(_, code)| *code)
        })
}

/// Returns the canonical code when `code` is a recognized two-letter code.
#[must_use]
pub fn canonical_code(code: &str) -> Option<&'static str> {
    let upper = code.trim().to_uppercase();
    STATE_CODES.iter().copied().find(|c| *c == upper)
}

/// Resolves a loosely typed state token to a two-letter code.
///
/// Tried in order:
/// 1. Exact two-letter code (`"tx"`)
/// 2. Exact name or alias (`"texas"`, `"district of columbia"`)
/// 3. Name prefix (`"penn"`)
/// 4. Name substring (`"carolina"`)
///
/// Steps 3 and 4 require at least three characters. When several names
/// match, the shortest wins, then alphabetical code order.
#[must_use]
pub fn resolve_state(token: &str) -> Option<&'static str> {
    let wanted = normalize_state_token(token);
    if wanted.is_empty() {
        return None;
    }

    if let Some(code) = canonical_code(&wanted) {
        return Some(code);
    }

    if let Some(code) = state_code_for_name(&wanted) {
        return Some(code);
    }

    if wanted.len() < MIN_FUZZY_LEN {
        return None;
    }

    best_match(&wanted, |name| name.starts_with(wanted.as_str()))
        .or_else(|| best_match(&wanted, |name| name.contains(wanted.as_str())))
}

fn best_match(wanted: &str, matches: impl Fn(&str) -> bool) -> Option<&'static str> {
    let candidate = STATE_CODES
        .iter()
        .copied()
        .filter_map(|code| state_name(code).map(|name| (code, normalize_state_token(name))))
        .filter(|(_, name)| matches(name))
        .min_by_key(|(_, name)| name.len());

    if let Some((code, name)) = &candidate {
        log::trace!("resolved state token '{wanted}' to {code} ({name})");
    }

    candidate.map(|(code, _)| code)
}
