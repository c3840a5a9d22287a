#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Salary analytics engine.
//!
//! [`SalaryAnalytics`] owns an immutable set of [`Location`] records and
//! answers every query the salary explorer needs: national and state
//! averages, percentile placement of an arbitrary salary, top/bottom
//! locations, benefit averages and histograms, text search with a
//! state-level fallback, side-by-side location comparison, and a combined
//! self-assessment of one salary.
//!
//! The dataset is handed in at construction; nothing here reads files or
//! holds global state. Every method takes `&self`, so one instance can be
//! shared across threads without coordination.

pub mod aggregate;
pub mod assess;
pub mod benefits;
pub mod compare;
pub mod lookup;
pub mod percentile;
pub mod ranking;
pub mod search;

#[cfg(test)]
pub(crate) mod test_fixtures;

use salary_map_salary_models::{Location, RoleKey};
use thiserror::Error;

pub use salary_map_analytics_models as models;

/// Errors that can occur while building the analytics engine.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// National aggregates are undefined over zero locations.
    #[error("Dataset contains no locations")]
    EmptyDataset,
}

/// Query engine over a fixed, non-empty set of locations.
#[derive(Debug, Clone)]
pub struct SalaryAnalytics {
    locations: Vec<Location>,
}

impl SalaryAnalytics {
    /// Wraps `locations` for querying.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::EmptyDataset`] if `locations` is empty.
    pub fn new(locations: Vec<Location>) -> Result<Self, AnalyticsError> {
        if locations.is_empty() {
            return Err(AnalyticsError::EmptyDataset);
        }

        log::debug!("analytics engine ready over {} locations", locations.len());

        Ok(Self { locations })
    }

    /// Returns every location in dataset order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of locations in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always `false`; construction rejects empty datasets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Role midpoints of every location, in dataset order.
    fn midpoints(&self, role: RoleKey) -> Vec<f64> {
        self.locations.iter().map(|loc| loc.midpoint(role)).collect()
    }
}

/// Rounds half-way values up, so `2.5 → 3` and `17.5 → 18`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Arithmetic mean, or `None` for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rounds a non-negative dollar/day/percent average to a whole number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn round_to_u64(value: f64) -> u64 {
    round_half_up(value).max(0.0) as u64
}

/// Same as [`round_to_u64`], narrowed for `u32` result fields.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn round_to_u32(value: f64) -> u32 {
    round_half_up(value).clamp(0.0, f64::from(u32::MAX)) as u32
}
