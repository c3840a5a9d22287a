//! Benefit averages, rankings, and histograms.
//!
//! Each benefit dimension is aggregated independently: a location that
//! doesn't report a bonus still contributes its PTO to the PTO average.
//! Missing values are skipped, never treated as zero.

use salary_map_analytics_models::{AverageBenefits, BenefitBucket};
use salary_map_salary_models::{BenefitType, Location};

use crate::{SalaryAnalytics, mean, round_half_up, round_to_u32};

/// Number of histogram buckets produced by
/// [`SalaryAnalytics::benefit_distribution`].
pub const DISTRIBUTION_BUCKETS: usize = 5;

/// Returns `location`'s value for `benefit`, or `None` if not reported.
#[must_use]
pub fn location_benefit_value(location: &Location, benefit: BenefitType) -> Option<f64> {
    location.benefit_value(benefit)
}

fn present_values<'a>(
    locations: impl IntoIterator<Item = &'a Location>,
    benefit: BenefitType,
) -> Vec<f64> {
    locations
        .into_iter()
        .filter_map(|loc| loc.benefit_value(benefit))
        .collect()
}

fn average_benefits(locations: &[&Location]) -> AverageBenefits {
    let avg = |benefit| {
        mean(&present_values(locations.iter().copied(), benefit)).map_or(0, round_to_u32)
    };
    AverageBenefits {
        pto_days: avg(BenefitType::PtoDays),
        bonus_percent: avg(BenefitType::BonusPercent),
        flex_percent: avg(BenefitType::FlexPercent),
        esop_percent: avg(BenefitType::EsopPercent),
        auto_allowance: avg(BenefitType::AutoAllowance),
    }
}

fn bucket_label(benefit: BenefitType, low: f64, high: f64) -> String {
    let low = round_half_up(low);
    let high = round_half_up(high);
    match benefit {
        BenefitType::PtoDays => format!("{low}-{high} days"),
        BenefitType::AutoAllowance => format!("${low}-${high}"),
        BenefitType::BonusPercent | BenefitType::FlexPercent | BenefitType::EsopPercent => {
            format!("{low}-{high}%")
        }
    }
}

impl SalaryAnalytics {
    /// Per-dimension benefit averages across the whole dataset.
    #[must_use]
    pub fn national_average_benefits(&self) -> AverageBenefits {
        let all: Vec<&Location> = self.locations.iter().collect();
        average_benefits(&all)
    }

    /// Per-dimension benefit averages within `state_code`.
    ///
    /// Returns `None` only when the state has no locations; a dimension no
    /// location in the state reports averages to 0.
    #[must_use]
    pub fn state_average_benefits(&self, state_code: &str) -> Option<AverageBenefits> {
        let state = self.locations_by_state(state_code);
        if state.is_empty() {
            return None;
        }
        Some(average_benefits(&state))
    }

    /// Histogram of `benefit` over [`DISTRIBUTION_BUCKETS`] equal-width
    /// buckets spanning the observed min and max.
    ///
    /// Buckets are half-open `[low, high)` except the last, which also
    /// includes its upper bound so the maximum is always counted. Returns
    /// an empty list if no location reports `benefit`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn benefit_distribution(&self, benefit: BenefitType) -> Vec<BenefitBucket> {
        let values = present_values(&self.locations, benefit);
        let Some(min) = values.iter().copied().reduce(f64::min) else {
            return Vec::new();
        };
        let max = values.iter().copied().fold(min, f64::max);
        let width = (max - min) / DISTRIBUTION_BUCKETS as f64;

        (0..DISTRIBUTION_BUCKETS)
            .map(|i| {
                let last = i == DISTRIBUTION_BUCKETS - 1;
                let low = (i as f64).mul_add(width, min);
                let high = if last {
                    max
                } else {
                    ((i + 1) as f64).mul_add(width, min)
                };
                let count = values
                    .iter()
                    .filter(|&&v| v >= low && (v < high || (last && v <= high)))
                    .count();
                BenefitBucket {
                    bucket: bucket_label(benefit, low, high),
                    count,
                }
            })
            .collect()
    }

    /// Up to `limit` locations reporting `benefit`, highest value first.
    /// Equal values keep dataset order.
    #[must_use]
    pub fn top_locations_by_benefit(&self, benefit: BenefitType, limit: usize) -> Vec<&Location> {
        let mut ranked: Vec<(&Location, f64)> = self
            .locations
            .iter()
            .filter_map(|loc| loc.benefit_value(benefit).map(|v| (loc, v)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.into_iter().take(limit).map(|(loc, _)| loc).collect()
    }

    /// Unrounded mean of `benefit` over the locations in `state_code` that
    /// report it.
    ///
    /// Returns `None` if the state has no locations or none report it.
    #[must_use]
    pub fn state_benefit_average(&self, state_code: &str, benefit: BenefitType) -> Option<f64> {
        mean(&present_values(
            self.locations_by_state(state_code),
            benefit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use salary_map_analytics_models::AverageBenefits;
    use salary_map_salary_models::BenefitType;

    use super::location_benefit_value;
    use crate::SalaryAnalytics;
    use crate::test_fixtures::{loc, sample, sample_locations, with_benefits};

    #[test]
    fn national_averages_use_independent_denominators() {
        let analytics = sample();
        assert_eq!(
            analytics.national_average_benefits(),
            AverageBenefits {
                pto_days: 17,
                bonus_percent: 16,
                flex_percent: 8,
                esop_percent: 4,
                auto_allowance: 575,
            }
        );
    }

    #[test]
    fn removing_a_location_without_bonus_only_moves_other_dimensions() {
        let full = sample().national_average_benefits();
        // Salt Lake City reports PTO only (10 days, below the mean).
        let without_slc: Vec<_> = sample_locations()
            .into_iter()
            .filter(|l| l.city != "Salt Lake City")
            .collect();
        let reduced = SalaryAnalytics::new(without_slc)
            .unwrap()
            .national_average_benefits();
        assert_eq!(reduced.bonus_percent, full.bonus_percent);
        assert_eq!(reduced.flex_percent, full.flex_percent);
        assert!(reduced.pto_days > full.pto_days);
    }

    #[test]
    fn missing_dimension_averages_to_zero() {
        let analytics = SalaryAnalytics::new(vec![loc("A", "Ohio", "OH", 0)]).unwrap();
        let avg = analytics.national_average_benefits();
        assert_eq!(avg.pto_days, 15);
        assert_eq!(avg.bonus_percent, 0);
        assert_eq!(avg.esop_percent, 0);
        assert_eq!(avg.auto_allowance, 0);
    }

    #[test]
    fn state_averages() {
        let analytics = sample();
        let tx = analytics.state_average_benefits("TX").unwrap();
        assert_eq!(tx.pto_days, 16);
        assert_eq!(tx.bonus_percent, 13);
        assert_eq!(tx.flex_percent, 5);
        assert_eq!(tx.esop_percent, 3);
        assert_eq!(tx.auto_allowance, 500);

        let ut = analytics.state_average_benefits("UT").unwrap();
        assert_eq!(ut.pto_days, 10);
        assert_eq!(ut.bonus_percent, 0);

        assert_eq!(analytics.state_average_benefits("ZZ"), None);
    }

    #[test]
    fn pto_distribution_buckets() {
        let analytics = sample();
        let buckets = analytics.benefit_distribution(BenefitType::PtoDays);
        let labels: Vec<&str> = buckets.iter().map(|b| b.bucket.as_str()).collect();
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(
            labels,
            vec![
                "10-13 days",
                "13-16 days",
                "16-19 days",
                "19-22 days",
                "22-25 days"
            ]
        );
        assert_eq!(counts, vec![2, 2, 1, 1, 2]);
    }

    #[test]
    fn auto_allowance_labels_use_dollars() {
        let analytics = sample();
        let buckets = analytics.benefit_distribution(BenefitType::AutoAllowance);
        assert_eq!(buckets[0].bucket, "$400-$480");
        assert_eq!(buckets[4].bucket, "$720-$800");
        assert_eq!(buckets[3].count, 0);
        assert_eq!(buckets[4].count, 1);
    }

    #[test]
    fn percent_labels_use_percent_sign() {
        let analytics = sample();
        let buckets = analytics.benefit_distribution(BenefitType::BonusPercent);
        // bonus midpoints 10, 15, 20, 10, 25 -> width 3
        assert_eq!(buckets[0].bucket, "10-13%");
        assert_eq!(buckets[4].bucket, "22-25%");
    }

    #[test]
    fn distribution_covers_every_present_value() {
        let analytics = sample();
        for benefit in BenefitType::all() {
            let present = analytics
                .locations()
                .iter()
                .filter(|l| location_benefit_value(l, *benefit).is_some())
                .count();
            let buckets = analytics.benefit_distribution(*benefit);
            assert_eq!(buckets.len(), 5, "{benefit}");
            assert_eq!(
                buckets.iter().map(|b| b.count).sum::<usize>(),
                present,
                "{benefit}"
            );
            assert!(buckets[4].count >= 1, "max of {benefit} not in last bucket");
        }
    }

    #[test]
    fn distribution_with_awkward_width_still_counts_max() {
        let values = [0.1, 0.2, 0.3, 0.7];
        let locations = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                with_benefits(
                    loc(&format!("C{i}"), "Ohio", "OH", 0),
                    (10.0, 10.0),
                    None,
                    Some(v),
                    None,
                    None,
                )
            })
            .collect();
        let analytics = SalaryAnalytics::new(locations).unwrap();
        let buckets = analytics.benefit_distribution(BenefitType::FlexPercent);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 4);
        assert_eq!(buckets[4].count, 1);
    }

    #[test]
    fn distribution_of_identical_values_lands_in_last_bucket() {
        let analytics = SalaryAnalytics::new(vec![
            loc("A", "Ohio", "OH", 0),
            loc("B", "Ohio", "OH", 0),
        ])
        .unwrap();
        let buckets = analytics.benefit_distribution(BenefitType::PtoDays);
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![0, 0, 0, 0, 2]);
        assert_eq!(buckets[0].bucket, "15-15 days");
    }

    #[test]
    fn distribution_empty_when_unreported() {
        let analytics = SalaryAnalytics::new(vec![loc("A", "Ohio", "OH", 0)]).unwrap();
        assert!(
            analytics
                .benefit_distribution(BenefitType::EsopPercent)
                .is_empty()
        );
    }

    #[test]
    fn top_by_benefit_skips_missing_values() {
        let analytics = sample();
        let top: Vec<&str> = analytics
            .top_locations_by_benefit(BenefitType::AutoAllowance, 10)
            .iter()
            .map(|l| l.city.as_str())
            .collect();
        assert_eq!(top, vec!["Los Angeles", "Austin", "Chicago", "Dallas"]);
    }

    #[test]
    fn top_by_benefit_ties_keep_dataset_order() {
        let analytics = sample();
        let top: Vec<&str> = analytics
            .top_locations_by_benefit(BenefitType::BonusPercent, 5)
            .iter()
            .map(|l| l.city.as_str())
            .collect();
        assert_eq!(top, vec!["New York", "San Francisco", "Houston", "Austin", "Chicago"]);
        assert_eq!(
            analytics
                .top_locations_by_benefit(BenefitType::BonusPercent, 2)
                .len(),
            2
        );
    }

    #[test]
    fn state_benefit_average_is_unrounded() {
        let analytics = sample();
        let pto = analytics
            .state_benefit_average("TX", BenefitType::PtoDays)
            .unwrap();
        assert!((pto - 47.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            analytics.state_benefit_average("TX", BenefitType::BonusPercent),
            Some(12.5)
        );
    }

    #[test]
    fn state_benefit_average_absent_cases() {
        let analytics = sample();
        assert_eq!(
            analytics.state_benefit_average("UT", BenefitType::BonusPercent),
            None
        );
        assert_eq!(
            analytics.state_benefit_average("ZZ", BenefitType::PtoDays),
            None
        );
    }
}
