#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types returned by the salary analytics engine.
//!
//! These are plain data structures handed to presentation code. They carry
//! no behaviour beyond small accessors and serialize with camelCase field
//! names so they can be emitted as JSON unchanged.

use salary_map_salary_models::{BenefitType, Location, RoleKey, Trend};
use serde::{Deserialize, Serialize};

/// A `{ min, max }` salary pair in whole dollars.
///
/// Depending on the query this is either the national envelope (smallest
/// min, largest max) or a state's mean range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEnvelope {
    /// Low end.
    pub min: u32,
    /// High end.
    pub max: u32,
}

/// Number of locations reporting each trend for a role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendCounts {
    /// Locations trending up.
    pub up: usize,
    /// Locations trending down.
    pub down: usize,
    /// Locations holding steady.
    pub stable: usize,
}

impl TrendCounts {
    /// Increments the counter for `trend`.
    pub const fn record(&mut self, trend: Trend) {
        match trend {
            Trend::Up => self.up += 1,
            Trend::Down => self.down += 1,
            Trend::Stable => self.stable += 1,
        }
    }

    /// Returns the count for `trend`.
    #[must_use]
    pub const fn get(&self, trend: Trend) -> usize {
        match trend {
            Trend::Up => self.up,
            Trend::Down => self.down,
            Trend::Stable => self.stable,
        }
    }

    /// Sum of all counts.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.up + self.down + self.stable
    }

    /// Returns the trend with the highest count. Ties go to `up`, then
    /// `down`.
    #[must_use]
    pub fn most_common(&self) -> Trend {
        if self.up >= self.down && self.up >= self.stable {
            Trend::Up
        } else if self.down >= self.stable {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

/// Where a salary sits among the locations of one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRank {
    /// 1-based rank; 1 means at or above the state's top earner.
    pub rank: usize,
    /// Number of locations in the state.
    pub total: usize,
    /// Whether the salary is at or above the plain mean of the state's
    /// midpoints.
    pub is_above_average: bool,
}

/// Average value of every benefit dimension, each rounded to the nearest
/// whole number.
///
/// Each dimension is averaged only over locations that report it. A
/// dimension nobody reports averages to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageBenefits {
    /// Mean PTO midpoint, in days.
    pub pto_days: u32,
    /// Mean bonus midpoint, in percent.
    pub bonus_percent: u32,
    /// Mean flex allowance, in percent.
    pub flex_percent: u32,
    /// Mean ESOP contribution, in percent.
    pub esop_percent: u32,
    /// Mean car allowance, in dollars.
    pub auto_allowance: u32,
}

impl AverageBenefits {
    /// Returns the averaged value for `benefit`.
    #[must_use]
    pub const fn get(&self, benefit: BenefitType) -> u32 {
        match benefit {
            BenefitType::PtoDays => self.pto_days,
            BenefitType::BonusPercent => self.bonus_percent,
            BenefitType::FlexPercent => self.flex_percent,
            BenefitType::EsopPercent => self.esop_percent,
            BenefitType::AutoAllowance => self.auto_allowance,
        }
    }
}

/// One histogram bar of a benefit distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitBucket {
    /// Display label, e.g. `"10-14 days"`, `"$400-$600"`, `"5-8%"`.
    pub bucket: String,
    /// Number of locations whose value falls in this bucket.
    pub count: usize,
}

/// Dataset-wide snapshot of one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    /// Role the summary describes.
    pub role: RoleKey,
    /// Rounded mean midpoint.
    pub average: u64,
    /// Smallest min and largest max across all locations.
    pub range: SalaryEnvelope,
    /// Majority trend.
    pub most_common_trend: Trend,
    /// Per-trend location counts.
    pub trends: TrendCounts,
}

/// Set when a search fell back to showing a whole state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateFallback {
    /// Two-letter code of the state being shown.
    pub state_code: String,
    /// Display name of the state being shown.
    pub state_name: String,
    /// The city part of the query that matched nothing.
    pub searched_city: String,
}

/// Result of a search that may fall back to state-level results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSearch<'a> {
    /// Matching locations in dataset order.
    pub locations: Vec<&'a Location>,
    /// Present only when `locations` came from the state fallback.
    pub fallback: Option<StateFallback>,
}

impl LocationSearch<'_> {
    /// Returns `true` when nothing matched, even after fallback.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns `true` when results came from the state fallback.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Highest-paying location for one role within a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleLeader {
    /// Role being compared.
    pub role: RoleKey,
    /// Position of the leading location in the compared selection.
    pub index: usize,
}

/// Side-by-side view of a user-chosen set of locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationComparison<'a> {
    /// Compared locations, in the order they were chosen.
    pub locations: Vec<&'a Location>,
    /// One entry per role, in seniority order.
    pub leaders: Vec<RoleLeader>,
}

impl<'a> LocationComparison<'a> {
    /// Returns the highest-paying compared location for `role`.
    #[must_use]
    pub fn leader(&self, role: RoleKey) -> Option<&'a Location> {
        self.leaders
            .iter()
            .find(|leader| leader.role == role)
            .and_then(|leader| self.locations.get(leader.index).copied())
    }
}

/// Where [`SalaryAssessment::local_max`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocalMaxSource {
    /// The chosen city's own range max.
    City,
    /// The mean of the state's range maxes.
    StateAverage,
}

/// How one salary stacks up nationally and within a state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryAssessment<'a> {
    /// Salary being assessed, in whole dollars.
    pub salary: u32,
    /// Role the salary is for.
    pub role: RoleKey,
    /// State the salary is compared within.
    pub state_code: String,
    /// Display name of that state.
    pub state_name: String,
    /// Number of dataset locations in the state.
    pub state_location_count: usize,
    /// National percentile.
    pub percentile: u8,
    /// Percentile within the state.
    pub state_percentile: u8,
    /// Rounded national mean midpoint.
    pub national_average: u64,
    /// Rounded state mean midpoint.
    pub state_average: u64,
    /// `salary - national_average`.
    pub national_difference: i64,
    /// `salary - state_average`.
    pub state_difference: i64,
    /// Highest-paying location in the dataset for the role.
    pub top_location: &'a Location,
    /// Top of the local range the salary could reach.
    pub local_max: u32,
    /// Whether `local_max` is the city's or the state average.
    pub local_max_source: LocalMaxSource,
}
