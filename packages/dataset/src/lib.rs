#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loading and validation of the salary location dataset.
//!
//! The dataset is a JSON array of [`Location`] records. Everything here is
//! read-once: callers load a `Vec<Location>` and hand it to the analytics
//! engine, which never touches the filesystem itself.

pub mod paths;

use std::collections::BTreeSet;
use std::path::Path;

use salary_map_geography_models::canonical_code;
use salary_map_salary_models::Location;

/// Errors that can occur while loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON or doesn't match the location shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset parsed but holds no locations.
    #[error("Dataset contains no locations")]
    Empty,

    /// A salary or benefit range has `min > max`.
    #[error("Invalid range for {field} in {city}, {state_code}: min {min} > max {max}")]
    InvalidRange {
        /// City of the offending location.
        city: String,
        /// State code of the offending location.
        state_code: String,
        /// Which range is inverted (a role key or benefit key).
        field: String,
        /// Reported lower bound.
        min: f64,
        /// Reported upper bound.
        max: f64,
    },

    /// A state code isn't two uppercase ASCII letters.
    #[error("Invalid state code '{state_code}' for {city}")]
    InvalidStateCode {
        /// City of the offending location.
        city: String,
        /// The code as found in the dataset.
        state_code: String,
    },

    /// Two locations share the same city (ignoring case) and state code.
    #[error("Duplicate location: {city}, {state_code}")]
    DuplicateLocation {
        /// City of the repeated location.
        city: String,
        /// State code of the repeated location.
        state_code: String,
    },
}

/// Parses and validates a JSON dataset.
///
/// # Errors
///
/// * [`DatasetError::Json`] if the input isn't a valid location array
/// * any error from [`validate`]
pub fn parse_dataset(json: &str) -> Result<Vec<Location>, DatasetError> {
    let locations: Vec<Location> = serde_json::from_str(json)?;
    validate(&locations)?;
    Ok(locations)
}

/// Reads, parses, and validates the dataset at `path`.
///
/// # Errors
///
/// * [`DatasetError::Io`] if the file can't be read
/// * any error from [`parse_dataset`]
pub fn load_dataset(path: &Path) -> Result<Vec<Location>, DatasetError> {
    log::debug!("Reading dataset from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    let locations = parse_dataset(&json)?;

    let states = locations
        .iter()
        .map(|loc| loc.state_code.as_str())
        .collect::<BTreeSet<_>>()
        .len();
    log::info!(
        "Loaded {} locations across {states} states from {}",
        locations.len(),
        path.display()
    );

    Ok(locations)
}

/// Checks the invariants the analytics engine relies on.
///
/// # Errors
///
/// * [`DatasetError::Empty`] if there are no locations
/// * [`DatasetError::InvalidStateCode`] if a code isn't two uppercase letters
/// * [`DatasetError::InvalidRange`] if any salary or benefit range is inverted
/// * [`DatasetError::DuplicateLocation`] if a city/state pair repeats
pub fn validate(locations: &[Location]) -> Result<(), DatasetError> {
    if locations.is_empty() {
        log::warn!("Dataset is empty");
        return Err(DatasetError::Empty);
    }

    let mut seen = BTreeSet::new();

    for loc in locations {
        validate_state_code(loc)?;
        validate_ranges(loc)?;

        if !seen.insert((loc.city.to_lowercase(), loc.state_code.clone())) {
            log::warn!("Duplicate location {}, {}", loc.city, loc.state_code);
            return Err(DatasetError::DuplicateLocation {
                city: loc.city.clone(),
                state_code: loc.state_code.clone(),
            });
        }
    }

    Ok(())
}

fn validate_state_code(loc: &Location) -> Result<(), DatasetError> {
    let code = loc.state_code.as_str();
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        log::warn!("Invalid state code '{code}' for {}", loc.city);
        return Err(DatasetError::InvalidStateCode {
            city: loc.city.clone(),
            state_code: loc.state_code.clone(),
        });
    }

    if canonical_code(code).is_none() {
        log::warn!(
            "State code {code} for {} is not a US state; it will group on its own",
            loc.city
        );
    }

    Ok(())
}

fn validate_ranges(loc: &Location) -> Result<(), DatasetError> {
    let invalid = |field: &str, min: f64, max: f64| {
        log::warn!(
            "Inverted {field} range in {}, {}: {min} > {max}",
            loc.city,
            loc.state_code
        );
        DatasetError::InvalidRange {
            city: loc.city.clone(),
            state_code: loc.state_code.clone(),
            field: field.to_string(),
            min,
            max,
        }
    };

    for (role, range) in loc.roles.iter() {
        if range.min > range.max {
            return Err(invalid(
                role.as_ref(),
                f64::from(range.min),
                f64::from(range.max),
            ));
        }
    }

    let pto = &loc.benefits.pto_days;
    if pto.min > pto.max {
        return Err(invalid("ptoDays", pto.min, pto.max));
    }

    if let Some(bonus) = loc.benefits.bonus_percent.as_ref().filter(|b| b.min > b.max) {
        return Err(invalid("bonusPercent", bonus.min, bonus.max));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use salary_map_salary_models::{BenefitType, RoleKey};

    use super::*;

    const BUNDLED: &str = include_str!("../../../data/salaries.json");

    const ONE_LOCATION: &str = r#"[{
        "city": "Boise",
        "state": "Idaho",
        "stateCode": "ID",
        "roles": {
            "director": { "min": 150000, "max": 200000, "trend": "up" },
            "seniorManager": { "min": 130000, "max": 170000, "trend": "up" },
            "manager": { "min": 100000, "max": 130000, "trend": "stable" },
            "seniorEstimator": { "min": 90000, "max": 115000, "trend": "stable" },
            "estimator": { "min": 70000, "max": 90000, "trend": "down" },
            "junior": { "min": 50000, "max": 65000, "trend": "stable" }
        },
        "benefits": {
            "ptoDays": { "min": 10, "max": 15 },
            "bonusPercent": { "min": 5, "max": 10 },
            "flexPercent": null,
            "esopPercent": null,
            "autoAllowance": null
        }
    }]"#;

    fn one_location() -> Vec<Location> {
        parse_dataset(ONE_LOCATION).unwrap()
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let locations = parse_dataset(BUNDLED).unwrap();
        assert!(locations.len() >= 10);
        assert!(locations.iter().any(|l| l.state_code == "TX"));
        assert!(
            locations
                .iter()
                .any(|l| l.benefit_value(BenefitType::BonusPercent).is_none())
        );
    }

    #[test]
    fn parses_single_location() {
        let locations = one_location();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].city, "Boise");
        assert_eq!(locations[0].role(RoleKey::Junior).max, 65_000);
    }

    #[test]
    fn empty_array_is_rejected() {
        assert!(matches!(parse_dataset("[]"), Err(DatasetError::Empty)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(parse_dataset("{"), Err(DatasetError::Json(_))));
        assert!(matches!(
            parse_dataset(r#"[{"city": "Nowhere"}]"#),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn inverted_salary_range_is_rejected() {
        let mut locations = one_location();
        locations[0].roles.manager.min = 200_000;
        match validate(&locations) {
            Err(DatasetError::InvalidRange { field, .. }) => assert_eq!(field, "manager"),
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn inverted_benefit_range_is_rejected() {
        let mut locations = one_location();
        locations[0].benefits.pto_days.min = 30.0;
        assert!(matches!(
            validate(&locations),
            Err(DatasetError::InvalidRange { .. })
        ));

        let mut locations = one_location();
        if let Some(bonus) = locations[0].benefits.bonus_percent.as_mut() {
            bonus.max = 1.0;
        }
        match validate(&locations) {
            Err(DatasetError::InvalidRange { field, .. }) => assert_eq!(field, "bonusPercent"),
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn state_code_must_be_two_uppercase_letters() {
        for code in ["id", "IDA", "I", "1D", ""] {
            let mut locations = one_location();
            locations[0].state_code = code.to_string();
            assert!(
                matches!(
                    validate(&locations),
                    Err(DatasetError::InvalidStateCode { .. })
                ),
                "{code:?}"
            );
        }
    }

    #[test]
    fn unrecognized_but_well_formed_code_is_allowed() {
        let mut locations = one_location();
        locations[0].state_code = "PR".to_string();
        assert!(validate(&locations).is_ok());
    }

    #[test]
    fn duplicate_city_state_is_rejected() {
        let mut locations = one_location();
        let mut twin = locations[0].clone();
        twin.city = "BOISE".to_string();
        locations.push(twin);
        assert!(matches!(
            validate(&locations),
            Err(DatasetError::DuplicateLocation { .. })
        ));
    }

    #[test]
    fn same_city_in_different_states_is_fine() {
        let mut locations = one_location();
        let mut other = locations[0].clone();
        other.state_code = "OR".to_string();
        other.state = "Oregon".to_string();
        locations.push(other);
        assert!(validate(&locations).is_ok());
    }

    #[test]
    fn load_reports_missing_file() {
        let missing = paths::data_dir().join("does-not-exist.json");
        assert!(matches!(load_dataset(&missing), Err(DatasetError::Io(_))));
    }

    #[test]
    fn load_reads_bundled_file() {
        let path = paths::data_dir().join("salaries.json");
        let locations = load_dataset(&path).unwrap();
        assert_eq!(locations, parse_dataset(BUNDLED).unwrap());
    }
}
