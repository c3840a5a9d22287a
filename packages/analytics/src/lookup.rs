//! State grouping and location lookups.

use std::collections::{BTreeMap, BTreeSet};

use salary_map_salary_models::Location;

use crate::SalaryAnalytics;

impl SalaryAnalytics {
    /// Returns every location whose `state_code` equals `state_code`, in
    /// dataset order.
    ///
    /// Unknown codes simply match nothing.
    #[must_use]
    pub fn locations_by_state(&self, state_code: &str) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|loc| loc.state_code == state_code)
            .collect()
    }

    /// Returns `true` if at least one location is in `state_code`.
    #[must_use]
    pub fn has_state_data(&self, state_code: &str) -> bool {
        self.locations.iter().any(|loc| loc.state_code == state_code)
    }

    /// Finds a location by city (case-insensitive) and exact state code.
    #[must_use]
    pub fn location_by_city(&self, city: &str, state_code: &str) -> Option<&Location> {
        let city = city.to_lowercase();
        self.locations
            .iter()
            .find(|loc| loc.state_code == state_code && loc.city.to_lowercase() == city)
    }

    /// Returns the distinct state codes present in the dataset, sorted.
    #[must_use]
    pub fn all_states(&self) -> Vec<&str> {
        self.locations
            .iter()
            .map(|loc| loc.state_code.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of locations per state code.
    #[must_use]
    pub fn location_count_by_state(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for loc in &self.locations {
            *counts.entry(loc.state_code.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Display name for `state_code`, or the code itself when it isn't a
    /// recognized US state.
    #[must_use]
    pub fn state_name<'a>(&self, state_code: &'a str) -> &'a str {
        salary_map_geography_models::state_name(state_code).unwrap_or(state_code)
    }
}
