//! "How do I stack up?" self-assessment of a single salary.

use salary_map_analytics_models::{LocalMaxSource, SalaryAssessment};
use salary_map_salary_models::RoleKey;

use crate::SalaryAnalytics;

/// `salary - average`, saturating for averages beyond `i64`.
fn difference(salary: u32, average: u64) -> i64 {
    i64::from(salary) - i64::try_from(average).unwrap_or(i64::MAX)
}

impl SalaryAnalytics {
    /// Places `salary` for `role` against the nation and `state_code`.
    ///
    /// `local_max` is the max of `city`'s range when `city` names a
    /// location in the state, and the state's average max otherwise.
    /// Returns `None` when the state has no locations.
    #[must_use]
    pub fn assess_salary(
        &self,
        salary: u32,
        role: RoleKey,
        state_code: &str,
        city: Option<&str>,
    ) -> Option<SalaryAssessment<'_>> {
        let value = f64::from(salary);
        let state_average = self.state_average_salary(state_code, role)?;
        let national_average = self.average_salary(role);

        let city_max = city.and_then(|name| {
            let found = self.location_by_city(name, state_code);
            if found.is_none() {
                log::debug!("{name} is not a location in {state_code}, using the state average");
            }
            found.map(|loc| loc.role(role).max)
        });
        let (local_max, local_max_source) = match city_max {
            Some(max) => (max, LocalMaxSource::City),
            None => (
                self.state_salary_range(state_code, role)?.max,
                LocalMaxSource::StateAverage,
            ),
        };

        Some(SalaryAssessment {
            salary,
            role,
            state_code: state_code.to_string(),
            state_name: self.state_name(state_code).to_string(),
            state_location_count: self.locations_by_state(state_code).len(),
            percentile: self.salary_percentile(value, role)?,
            state_percentile: self.state_salary_percentile(value, role, state_code)?,
            national_average,
            state_average,
            national_difference: difference(salary, national_average),
            state_difference: difference(salary, state_average),
            top_location: self.top_paying_locations(role, 1).into_iter().next()?,
            local_max,
            local_max_source,
        })
    }
}

#[cfg(test)]
mod tests {
    use salary_map_analytics_models::LocalMaxSource;
    use salary_map_salary_models::RoleKey;

    use super::difference;
    use crate::test_fixtures::sample;

    #[test]
    fn assesses_against_nation_state_and_city() {
        let analytics = sample();
        let assessment = analytics
            .assess_salary(180_000, RoleKey::Director, "TX", Some("dallas"))
            .unwrap();

        // national midpoints: 150k 160k 175k | 190k 200k 230k 250k 260k -> 3/8
        assert_eq!(assessment.percentile, 38);
        // TX midpoints: 160k 175k | 190k -> 2/3
        assert_eq!(assessment.state_percentile, 67);
        assert_eq!(assessment.national_average, 201_875);
        assert_eq!(assessment.state_average, 175_000);
        assert_eq!(assessment.national_difference, -21_875);
        assert_eq!(assessment.state_difference, 5_000);
        assert_eq!(assessment.top_location.city, "San Francisco");
        assert_eq!(assessment.local_max, 220_000);
        assert_eq!(assessment.local_max_source, LocalMaxSource::City);
        assert_eq!(assessment.state_name, "Texas");
        assert_eq!(assessment.state_location_count, 3);
    }

    #[test]
    fn without_city_uses_state_average_max() {
        let analytics = sample();
        let assessment = analytics
            .assess_salary(180_000, RoleKey::Director, "TX", None)
            .unwrap();
        assert_eq!(assessment.local_max, 200_000);
        assert_eq!(assessment.local_max_source, LocalMaxSource::StateAverage);
    }

    #[test]
    fn unknown_city_uses_state_average_max() {
        let analytics = sample();
        let assessment = analytics
            .assess_salary(180_000, RoleKey::Director, "TX", Some("Chicago"))
            .unwrap();
        assert_eq!(assessment.local_max, 200_000);
        assert_eq!(assessment.local_max_source, LocalMaxSource::StateAverage);
    }

    #[test]
    fn matches_standalone_queries() {
        let analytics = sample();
        let assessment = analytics
            .assess_salary(240_000, RoleKey::Director, "CA", None)
            .unwrap();
        assert_eq!(
            Some(assessment.percentile),
            analytics.salary_percentile(240_000.0, RoleKey::Director)
        );
        assert_eq!(
            Some(assessment.state_percentile),
            analytics.state_salary_percentile(240_000.0, RoleKey::Director, "CA")
        );
    }

    #[test]
    fn unknown_state_has_no_assessment() {
        let analytics = sample();
        assert!(
            analytics
                .assess_salary(100_000, RoleKey::Director, "ZZ", None)
                .is_none()
        );
    }

    #[test]
    fn difference_is_signed() {
        assert_eq!(difference(100, 150), -50);
        assert_eq!(difference(150, 100), 50);
        assert_eq!(difference(0, u64::MAX), -i64::MAX);
    }
}
