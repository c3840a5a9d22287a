//! Free-text location search with a state-level fallback.
//!
//! Primary search is a case-insensitive substring match. When that finds
//! nothing, the query is read as `"City, State"`, `"City State Name"`, or
//! a lone token, and the state part is resolved loosely so the caller can
//! say "'Foo' isn't in our data, showing N locations in State".

use std::sync::LazyLock;

use regex::Regex;
use salary_map_analytics_models::{LocationSearch, StateFallback};
use salary_map_geography_models::{resolve_state, state_name};
use salary_map_salary_models::Location;

use crate::SalaryAnalytics;

/// `"City, State"` with the state taken after the last comma.
static CITY_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<city>.+?)\s*,\s*(?P<state>[^,]+)$").expect("valid regex")
});

/// A `(searched_city, state_token)` pair to try during fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FallbackCandidate<'q> {
    city: &'q str,
    state: &'q str,
}

/// Splits a query that matched nothing into city/state guesses, most
/// specific first.
fn fallback_candidates(query: &str) -> Vec<FallbackCandidate<'_>> {
    if let Some(caps) = CITY_STATE_RE.captures(query) {
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str().trim());
        return vec![FallbackCandidate {
            city: group("city"),
            state: group("state"),
        }];
    }

    let word_starts: Vec<usize> = query
        .char_indices()
        .filter(|&(i, c)| {
            !c.is_whitespace() && (i == 0 || query[..i].ends_with(char::is_whitespace))
        })
        .map(|(i, _)| i)
        .collect();

    // Longest trailing phrase first so "North Dakota" wins over "Dakota".
    let mut candidates: Vec<FallbackCandidate<'_>> = word_starts
        .iter()
        .skip(1)
        .map(|&start| FallbackCandidate {
            city: query[..start].trim(),
            state: query[start..].trim(),
        })
        .collect();

    candidates.push(FallbackCandidate {
        city: query,
        state: query,
    });
    candidates
}

fn matches_query(location: &Location, needle: &str) -> bool {
    location.city.to_lowercase().contains(needle)
        || location.state.to_lowercase().contains(needle)
        || location.state_code.to_lowercase().contains(needle)
        || state_name(&location.state_code).is_some_and(|name| name.to_lowercase().contains(needle))
}

impl SalaryAnalytics {
    /// Locations whose city, stored state, state code, or canonical state
    /// name contains `query`, ignoring case and surrounding whitespace.
    ///
    /// A blank query returns the whole dataset. Results keep dataset order.
    #[must_use]
    pub fn search_locations(&self, query: &str) -> Vec<&Location> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.locations.iter().collect();
        }

        self.locations
            .iter()
            .filter(|loc| matches_query(loc, &needle))
            .collect()
    }

    /// Like [`Self::search_locations`], but when nothing matches tries to
    /// resolve part of the query to a state.
    ///
    /// If the city part matches a location in that state, those locations
    /// are returned as a plain match. Otherwise the whole state is returned
    /// and `fallback` names the city that wasn't found.
    #[must_use]
    pub fn search_locations_with_fallback(&self, query: &str) -> LocationSearch<'_> {
        let trimmed = query.trim();
        let locations = self.search_locations(trimmed);
        if !locations.is_empty() || trimmed.is_empty() {
            return LocationSearch {
                locations,
                fallback: None,
            };
        }

        for candidate in fallback_candidates(trimmed) {
            let Some(code) = resolve_state(candidate.state) else {
                continue;
            };
            let locations = self.locations_by_state(code);
            if locations.is_empty() {
                log::debug!("'{trimmed}' resolved to {code}, which has no locations");
                continue;
            }

            let city = candidate.city.to_lowercase();
            let in_city: Vec<&Location> = locations
                .iter()
                .copied()
                .filter(|loc| !city.is_empty() && loc.city.to_lowercase().contains(&city))
                .collect();
            if !in_city.is_empty() {
                return LocationSearch {
                    locations: in_city,
                    fallback: None,
                };
            }

            log::debug!(
                "no match for '{trimmed}', falling back to {} locations in {code}",
                locations.len()
            );

            return LocationSearch {
                locations,
                fallback: Some(StateFallback {
                    state_code: code.to_string(),
                    state_name: self.state_name(code).to_string(),
                    searched_city: candidate.city.to_string(),
                }),
            };
        }

        LocationSearch {
            locations: Vec::new(),
            fallback: None,
        }
    }
}
