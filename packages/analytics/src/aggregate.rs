//! Dataset-wide and per-state salary aggregates.
//!
//! National aggregates always produce a value because the engine never
//! holds an empty dataset. State aggregates return `None` when the state
//! has no locations so that "no data" can't be mistaken for a zero
//! average.

use salary_map_analytics_models::{RoleSummary, SalaryEnvelope, TrendCounts};
use salary_map_salary_models::{RoleKey, Trend};

use crate::{SalaryAnalytics, mean, round_to_u32, round_to_u64};

impl SalaryAnalytics {
    /// Rounded mean of every location's midpoint for `role`.
    #[must_use]
    pub fn average_salary(&self, role: RoleKey) -> u64 {
        mean(&self.midpoints(role)).map_or(0, round_to_u64)
    }

    /// Rounded mean midpoint for `role` within `state_code`.
    ///
    /// Returns `None` when the state has no locations.
    #[must_use]
    pub fn state_average_salary(&self, state_code: &str, role: RoleKey) -> Option<u64> {
        let midpoints: Vec<f64> = self
            .locations_by_state(state_code)
            .iter()
            .map(|loc| loc.midpoint(role))
            .collect();
        mean(&midpoints).map(round_to_u64)
    }

    /// Rounded mean of every role's midpoint across every location in
    /// `state_code`.
    #[must_use]
    pub fn state_average_salary_all_roles(&self, state_code: &str) -> Option<u64> {
        let midpoints: Vec<f64> = self
            .locations_by_state(state_code)
            .iter()
            .flat_map(|loc| loc.roles.iter().map(|(_, range)| range.midpoint()))
            .collect();
        mean(&midpoints).map(round_to_u64)
    }

    /// Smallest `min` and largest `max` for `role` across all locations.
    #[must_use]
    pub fn national_salary_range(&self, role: RoleKey) -> SalaryEnvelope {
        let min = self
            .locations
            .iter()
            .map(|loc| loc.role(role).min)
            .min()
            .unwrap_or(0);
        let max = self
            .locations
            .iter()
            .map(|loc| loc.role(role).max)
            .max()
            .unwrap_or(0);
        SalaryEnvelope { min, max }
    }

    /// Mean of per-location mins and mean of per-location maxes for `role`
    /// in `state_code`, each rounded.
    ///
    /// This is an average range, not an envelope.
    #[must_use]
    pub fn state_salary_range(&self, state_code: &str, role: RoleKey) -> Option<SalaryEnvelope> {
        let state = self.locations_by_state(state_code);
        let mins: Vec<f64> = state.iter().map(|l| f64::from(l.role(role).min)).collect();
        let maxes: Vec<f64> = state.iter().map(|l| f64::from(l.role(role).max)).collect();

        Some(SalaryEnvelope {
            min: round_to_u32(mean(&mins)?),
            max: round_to_u32(mean(&maxes)?),
        })
    }

    /// How many locations report each trend for `role`.
    #[must_use]
    pub fn trend_distribution(&self, role: RoleKey) -> TrendCounts {
        let mut counts = TrendCounts::default();
        for loc in &self.locations {
            counts.record(loc.role(role).trend);
        }
        counts
    }

    /// Majority trend for `role`; ties resolve `up` over `down` over
    /// `stable`.
    #[must_use]
    pub fn most_common_trend(&self, role: RoleKey) -> Trend {
        self.trend_distribution(role).most_common()
    }

    /// Bundles the national aggregates for `role`.
    #[must_use]
    pub fn role_summary(&self, role: RoleKey) -> RoleSummary {
        let trends = self.trend_distribution(role);
        RoleSummary {
            role,
            average: self.average_salary(role),
            range: self.national_salary_range(role),
            most_common_trend: trends.most_common(),
            trends,
        }
    }
}
