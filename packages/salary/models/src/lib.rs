#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Location, salary range, and benefit types for the salary dataset.
//!
//! This crate defines the shape of one city's compensation profile as it
//! appears in the bundled JSON dataset. Field names serialize exactly as the
//! dataset stores them (`stateCode`, `seniorManager`, `ptoDays`, ...).

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Direction a role's salary is moving at a location.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    /// Salaries are rising.
    Up,
    /// Salaries are falling.
    Down,
    /// No meaningful movement.
    Stable,
}

impl Trend {
    /// Returns all variants in tie-break precedence order (`up` first).
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Up, Self::Down, Self::Stable]
    }
}

/// One of the six preconstruction roles tracked per location.
///
/// Variants are declared in seniority order, most senior first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RoleKey {
    /// Director of Preconstruction
    Director,
    /// Senior Preconstruction Manager
    SeniorManager,
    /// Preconstruction Manager
    Manager,
    /// Senior Estimator
    SeniorEstimator,
    /// Estimator
    Estimator,
    /// Junior Estimator
    Junior,
}

impl RoleKey {
    /// Returns the human-readable job title for this role.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Director => "Director of Preconstruction",
            Self::SeniorManager => "Senior Preconstruction Manager",
            Self::Manager => "Preconstruction Manager",
            Self::SeniorEstimator => "Senior Estimator",
            Self::Estimator => "Estimator",
            Self::Junior => "Junior Estimator",
        }
    }

    /// Returns all roles in seniority order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Director,
            Self::SeniorManager,
            Self::Manager,
            Self::SeniorEstimator,
            Self::Estimator,
            Self::Junior,
        ]
    }
}

/// Annual salary range for one role at one location, in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Low end of the range.
    pub min: u32,
    /// High end of the range.
    pub max: u32,
    /// Direction the range is moving.
    pub trend: Trend,
}

impl SalaryRange {
    /// Returns `(min + max) / 2`, the representative salary for ranking and
    /// averaging.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

/// Salary ranges for every role at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roles {
    /// Director of Preconstruction.
    pub director: SalaryRange,
    /// Senior Preconstruction Manager.
    pub senior_manager: SalaryRange,
    /// Preconstruction Manager.
    pub manager: SalaryRange,
    /// Senior Estimator.
    pub senior_estimator: SalaryRange,
    /// Estimator.
    pub estimator: SalaryRange,
    /// Junior Estimator.
    pub junior: SalaryRange,
}

impl Roles {
    /// Returns the salary range for `role`.
    #[must_use]
    pub const fn get(&self, role: RoleKey) -> &SalaryRange {
        match role {
            RoleKey::Director => &self.director,
            RoleKey::SeniorManager => &self.senior_manager,
            RoleKey::Manager => &self.manager,
            RoleKey::SeniorEstimator => &self.senior_estimator,
            RoleKey::Estimator => &self.estimator,
            RoleKey::Junior => &self.junior,
        }
    }

    /// Iterates `(role, range)` pairs in seniority order.
    pub fn iter(&self) -> impl Iterator<Item = (RoleKey, &SalaryRange)> {
        RoleKey::all().iter().map(|&role| (role, self.get(role)))
    }
}

/// A `{ min, max }` pair used for PTO days and bonus percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeValue {
    /// Low end.
    pub min: f64,
    /// High end.
    pub max: f64,
}

impl RangeValue {
    /// Returns `(min + max) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Benefit dimensions that can be aggregated, ranked, or bucketed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BenefitType {
    /// Paid time off, in days per year.
    PtoDays,
    /// Annual bonus as a percentage of salary.
    BonusPercent,
    /// Flexible benefit allowance as a percentage of salary.
    FlexPercent,
    /// Employee stock ownership contribution as a percentage of salary.
    EsopPercent,
    /// Monthly car allowance in dollars.
    AutoAllowance,
}

impl BenefitType {
    /// Returns a short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PtoDays => "PTO Days",
            Self::BonusPercent => "Bonus %",
            Self::FlexPercent => "Flex %",
            Self::EsopPercent => "ESOP %",
            Self::AutoAllowance => "Auto Allowance",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PtoDays,
            Self::BonusPercent,
            Self::FlexPercent,
            Self::EsopPercent,
            Self::AutoAllowance,
        ]
    }
}

/// Benefits reported for a location.
///
/// Optional fields are `None` when the location did not report that
/// dimension. They stay `None` through every aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefits {
    /// Paid time off range, in days.
    pub pto_days: RangeValue,
    /// Bonus range, in percent of salary.
    pub bonus_percent: Option<RangeValue>,
    /// Flex allowance, in percent of salary.
    pub flex_percent: Option<f64>,
    /// ESOP contribution, in percent of salary.
    pub esop_percent: Option<f64>,
    /// Car allowance, in dollars.
    pub auto_allowance: Option<f64>,
}

impl Benefits {
    /// Returns the scalar value for `benefit`, or `None` if it isn't
    /// reported.
    ///
    /// Range-valued dimensions (PTO, bonus) collapse to their midpoint.
    #[must_use]
    pub fn value(&self, benefit: BenefitType) -> Option<f64> {
        match benefit {
            BenefitType::PtoDays => Some(self.pto_days.midpoint()),
            BenefitType::BonusPercent => self.bonus_percent.as_ref().map(RangeValue::midpoint),
            BenefitType::FlexPercent => self.flex_percent,
            BenefitType::EsopPercent => self.esop_percent,
            BenefitType::AutoAllowance => self.auto_allowance,
        }
    }
}

/// One city's full compensation profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Display name of the city (e.g. "Chicago").
    pub city: String,
    /// State name as stored in the dataset.
    pub state: String,
    /// Two-letter uppercase state code; the join key for state grouping.
    pub state_code: String,
    /// Salary ranges per role.
    pub roles: Roles,
    /// Reported benefits.
    pub benefits: Benefits,
}

impl Location {
    /// Returns the salary range for `role`.
    #[must_use]
    pub const fn role(&self, role: RoleKey) -> &SalaryRange {
        self.roles.get(role)
    }

    /// Returns the midpoint salary for `role`.
    #[must_use]
    pub fn midpoint(&self, role: RoleKey) -> f64 {
        self.roles.get(role).midpoint()
    }

    /// Returns this location's value for `benefit`.
    #[must_use]
    pub fn benefit_value(&self, benefit: BenefitType) -> Option<f64> {
        self.benefits.value(benefit)
    }
}
