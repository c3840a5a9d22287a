//! Percentile and rank placement of an arbitrary salary.
//!
//! Percentiles use the midrank method: ties count as half below and half
//! above. Salaries at or beyond the population's extremes are clamped to
//! `1/(n+1)` and `n/(n+1)` instead of 0% and 100%, since a finite sample
//! can't establish that someone is the absolute lowest or highest earner.

use salary_map_analytics_models::StateRank;
use salary_map_salary_models::RoleKey;

use crate::{SalaryAnalytics, mean, round_half_up};

/// Percentile of `salary` within `sorted`, which must be ascending.
///
/// Returns `None` for an empty population or a non-finite salary.
/// Otherwise:
///
/// * `salary <= min` gives `round(100 / (n + 1))`
/// * `salary >= max` gives `round(100 * n / (n + 1))`
/// * anything in between gives `round(100 * (below + equal / 2) / n)`,
///   where `below` counts values strictly less than `salary` and `equal`
///   counts exact matches
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn midrank_percentile(sorted: &[f64], salary: f64) -> Option<u8> {
    if !salary.is_finite() {
        return None;
    }
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let n = sorted.len() as f64;

    let raw = if salary <= min {
        100.0 / (n + 1.0)
    } else if salary >= max {
        100.0 * n / (n + 1.0)
    } else {
        let below = sorted.partition_point(|&v| v < salary);
        let equal = sorted[below..].partition_point(|&v| v <= salary);
        let effective_rank = below as f64 + 0.5 * equal as f64;
        100.0 * effective_rank / n
    };

    Some(to_percent(round_half_up(raw)))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

fn sorted_ascending(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}

impl SalaryAnalytics {
    /// Percentile of `salary` among every location's `role` midpoint.
    ///
    /// Returns `None` only for a non-finite salary.
    #[must_use]
    pub fn salary_percentile(&self, salary: f64, role: RoleKey) -> Option<u8> {
        midrank_percentile(&sorted_ascending(self.midpoints(role)), salary)
    }

    /// Percentile of `salary` among the `role` midpoints of one state.
    ///
    /// Returns `None` when the state has no locations or `salary` isn't
    /// finite.
    #[must_use]
    pub fn state_salary_percentile(
        &self,
        salary: f64,
        role: RoleKey,
        state_code: &str,
    ) -> Option<u8> {
        let midpoints = self
            .locations_by_state(state_code)
            .iter()
            .map(|loc| loc.midpoint(role))
            .collect();
        midrank_percentile(&sorted_ascending(midpoints), salary)
    }

    /// Percentile of `salary` nationally, or within `state_code` when
    /// given.
    #[must_use]
    pub fn salary_percentile_in(
        &self,
        salary: f64,
        role: RoleKey,
        state_code: Option<&str>,
    ) -> Option<u8> {
        match state_code {
            Some(code) => self.state_salary_percentile(salary, role, code),
            None => self.salary_percentile(salary, role),
        }
    }

    /// Rank of `salary` among the locations of `state_code`, highest
    /// first.
    ///
    /// `rank` is the 1-based position of the first location whose midpoint
    /// `salary` meets or exceeds, capped at `total` when `salary` is below
    /// every location. `is_above_average` compares against the plain mean
    /// of the state's midpoints. Returns `None` when the state has no
    /// locations or `salary` isn't finite.
    #[must_use]
    pub fn state_salary_rank(
        &self,
        salary: f64,
        role: RoleKey,
        state_code: &str,
    ) -> Option<StateRank> {
        if !salary.is_finite() {
            return None;
        }
        let mut midpoints: Vec<f64> = self
            .locations_by_state(state_code)
            .iter()
            .map(|loc| loc.midpoint(role))
            .collect();
        let average = mean(&midpoints)?;

        midpoints.sort_by(|a, b| b.total_cmp(a));
        let total = midpoints.len();
        let beaten = midpoints.iter().take_while(|&&mid| salary < mid).count();

        log::debug!(
            "state rank for {salary} ({role}) in {state_code}: {} of {total}",
            beaten + 1
        );

        Some(StateRank {
            rank: (beaten + 1).min(total),
            total,
            is_above_average: salary >= average,
        })
    }
}
