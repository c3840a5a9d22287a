//! Highest- and lowest-paying locations for a role.

use salary_map_salary_models::{Location, RoleKey};

use crate::SalaryAnalytics;

impl SalaryAnalytics {
    /// Up to `limit` locations with the highest `role` midpoints, highest
    /// first. Equal midpoints keep dataset order.
    #[must_use]
    pub fn top_paying_locations(&self, role: RoleKey, limit: usize) -> Vec<&Location> {
        let mut ranked: Vec<&Location> = self.locations.iter().collect();
        ranked.sort_by(|a, b| b.midpoint(role).total_cmp(&a.midpoint(role)));
        ranked.truncate(limit);
        ranked
    }

    /// Up to `limit` locations with the lowest `role` midpoints, lowest
    /// first. Equal midpoints keep dataset order.
    #[must_use]
    pub fn lowest_paying_locations(&self, role: RoleKey, limit: usize) -> Vec<&Location> {
        let mut ranked: Vec<&Location> = self.locations.iter().collect();
        ranked.sort_by(|a, b| a.midpoint(role).total_cmp(&b.midpoint(role)));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use salary_map_salary_models::{RoleKey, Trend};

    use crate::SalaryAnalytics;
    use crate::test_fixtures::{loc, sample, with_role};

    fn cities<'a>(locations: &[&'a salary_map_salary_models::Location]) -> Vec<&'a str> {
        locations.iter().map(|l| l.city.as_str()).collect()
    }

    #[test]
    fn top_paying_descends() {
        let analytics = sample();
        let top = analytics.top_paying_locations(RoleKey::Director, 5);
        assert_eq!(top.len(), 5);
        assert!(
            top.windows(2)
                .all(|w| w[0].midpoint(RoleKey::Director) >= w[1].midpoint(RoleKey::Director))
        );
        assert_eq!(
            cities(&top),
            vec!["San Francisco", "New York", "Los Angeles", "Chicago", "Dallas"]
        );
    }

    #[test]
    fn lowest_paying_ascends() {
        let analytics = sample();
        let bottom = analytics.lowest_paying_locations(RoleKey::Director, 3);
        assert!(
            bottom
                .windows(2)
                .all(|w| w[0].midpoint(RoleKey::Director) <= w[1].midpoint(RoleKey::Director))
        );
        assert_eq!(cities(&bottom), vec!["Salt Lake City", "Houston", "Austin"]);
    }

    #[test]
    fn limit_beyond_population_returns_all() {
        let analytics = sample();
        assert_eq!(
            analytics.top_paying_locations(RoleKey::Director, 100).len(),
            analytics.len()
        );
        assert!(analytics.lowest_paying_locations(RoleKey::Junior, 0).is_empty());
    }

    #[test]
    fn ties_keep_dataset_order() {
        let analytics = SalaryAnalytics::new(vec![
            with_role(loc("First", "Ohio", "OH", 0), RoleKey::Manager, 100, 200, Trend::Up),
            with_role(loc("Second", "Ohio", "OH", 0), RoleKey::Manager, 50, 250, Trend::Up),
            with_role(loc("Third", "Ohio", "OH", 0), RoleKey::Manager, 300, 300, Trend::Up),
        ])
        .unwrap();
        assert_eq!(
            cities(&analytics.top_paying_locations(RoleKey::Manager, 3)),
            vec!["Third", "First", "Second"]
        );
        assert_eq!(
            cities(&analytics.lowest_paying_locations(RoleKey::Manager, 3)),
            vec!["First", "Second", "Third"]
        );
    }
}
