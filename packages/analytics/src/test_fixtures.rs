//! In-code fixtures for analytics tests.

use salary_map_salary_models::{Benefits, Location, RangeValue, RoleKey, Roles, SalaryRange, Trend};

use crate::SalaryAnalytics;

pub const fn range(min: u32, max: u32, trend: Trend) -> SalaryRange {
    SalaryRange { min, max, trend }
}

/// A location whose every role is `base..base + 20_000`, stable, with
/// 10-20 PTO days and no optional benefits.
pub fn loc(city: &str, state: &str, code: &str, base: u32) -> Location {
    let r = range(base, base + 20_000, Trend::Stable);
    Location {
        city: city.to_string(),
        state: state.to_string(),
        state_code: code.to_string(),
        roles: Roles {
            director: r,
            senior_manager: r,
            manager: r,
            senior_estimator: r,
            estimator: r,
            junior: r,
        },
        benefits: Benefits {
            pto_days: RangeValue {
                min: 10.0,
                max: 20.0,
            },
            bonus_percent: None,
            flex_percent: None,
            esop_percent: None,
            auto_allowance: None,
        },
    }
}

pub fn with_role(mut location: Location, role: RoleKey, min: u32, max: u32, trend: Trend) -> Location {
    let r = range(min, max, trend);
    match role {
        RoleKey::Director => location.roles.director = r,
        RoleKey::SeniorManager => location.roles.senior_manager = r,
        RoleKey::Manager => location.roles.manager = r,
        RoleKey::SeniorEstimator => location.roles.senior_estimator = r,
        RoleKey::Estimator => location.roles.estimator = r,
        RoleKey::Junior => location.roles.junior = r,
    }
    location
}

pub fn with_benefits(
    mut location: Location,
    pto: (f64, f64),
    bonus: Option<(f64, f64)>,
    flex: Option<f64>,
    esop: Option<f64>,
    auto: Option<f64>,
) -> Location {
    location.benefits = Benefits {
        pto_days: RangeValue {
            min: pto.0,
            max: pto.1,
        },
        bonus_percent: bonus.map(|(min, max)| RangeValue { min, max }),
        flex_percent: flex,
        esop_percent: esop,
        auto_allowance: auto,
    };
    location
}

/// Locations with one varying role (director) and varied benefits.
///
/// | City | State | Director mid | Trend | PTO mid | Bonus mid | Flex | ESOP | Auto |
/// |---|---|---|---|---|---|---|---|---|
/// | Austin | TX | 175000 | up | 15 | 10 | 5 | - | 600 |
/// | Dallas | TX | 190000 | up | 20 | - | - | 3 | 400 |
/// | Houston | TX | 160000 | down | 12 | 15 | - | - | - |
/// | San Francisco | CA | 260000 | up | 25 | 20 | 10 | 6 | - |
/// | Los Angeles | CA | 230000 | stable | 18 | - | 8 | - | 800 |
/// | Chicago | IL | 200000 | stable | 15 | 10 | - | - | 500 |
/// | New York | NY | 250000 | down | 22 | 25 | 7 | 4 | - |
/// | Salt Lake City | UT | 150000 | stable | 10 | - | - | - | - |
pub fn sample_locations() -> Vec<Location> {
    let d = RoleKey::Director;
    vec![
        with_benefits(
            with_role(loc("Austin", "Texas", "TX", 90_000), d, 150_000, 200_000, Trend::Up),
            (10.0, 20.0),
            Some((5.0, 15.0)),
            Some(5.0),
            None,
            Some(600.0),
        ),
        with_benefits(
            with_role(loc("Dallas", "Texas", "TX", 95_000), d, 160_000, 220_000, Trend::Up),
            (15.0, 25.0),
            None,
            None,
            Some(3.0),
            Some(400.0),
        ),
        with_benefits(
            with_role(loc("Houston", "Texas", "TX", 85_000), d, 140_000, 180_000, Trend::Down),
            (10.0, 14.0),
            Some((10.0, 20.0)),
            None,
            None,
            None,
        ),
        with_benefits(
            with_role(
                loc("San Francisco", "California", "CA", 130_000),
                d,
                220_000,
                300_000,
                Trend::Up,
            ),
            (20.0, 30.0),
            Some((15.0, 25.0)),
            Some(10.0),
            Some(6.0),
            None,
        ),
        with_benefits(
            with_role(
                loc("Los Angeles", "California", "CA", 120_000),
                d,
                200_000,
                260_000,
                Trend::Stable,
            ),
            (15.0, 21.0),
            None,
            Some(8.0),
            None,
            Some(800.0),
        ),
        with_benefits(
            with_role(loc("Chicago", "Illinois", "IL", 100_000), d, 170_000, 230_000, Trend::Stable),
            (12.0, 18.0),
            Some((8.0, 12.0)),
            None,
            None,
            Some(500.0),
        ),
        with_benefits(
            with_role(loc("New York", "New York", "NY", 125_000), d, 210_000, 290_000, Trend::Down),
            (18.0, 26.0),
            Some((20.0, 30.0)),
            Some(7.0),
            Some(4.0),
            None,
        ),
        with_benefits(
            with_role(
                loc("Salt Lake City", "Utah", "UT", 80_000),
                d,
                130_000,
                170_000,
                Trend::Stable,
            ),
            (8.0, 12.0),
            None,
            None,
            None,
            None,
        ),
    ]
}

pub fn sample() -> SalaryAnalytics {
    SalaryAnalytics::new(sample_locations()).expect("fixture is non-empty")
}

/// One location per midpoint, all in the same state, for exercising the
/// percentile engine against a known population.
pub fn population(code: &str, midpoints: &[u32]) -> SalaryAnalytics {
    let locations = midpoints
        .iter()
        .enumerate()
        .map(|(i, &mid)| {
            with_role(
                loc(&format!("City {i}"), "Somewhere", code, 50_000),
                RoleKey::Director,
                mid,
                mid,
                Trend::Stable,
            )
        })
        .collect();
    SalaryAnalytics::new(locations).expect("population is non-empty")
}
