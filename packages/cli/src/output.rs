//! Plain-text rendering of analytics results.

use std::fmt::Write as _;

use salary_map_analytics::models::{
    AverageBenefits, BenefitBucket, LocalMaxSource, LocationComparison, LocationSearch,
    RoleSummary, SalaryAssessment, StateRank,
};
use salary_map_salary_models::{BenefitType, Location, RoleKey, Trend};

/// Widest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

/// Formats whole dollars with thousands separators, e.g. `$201,875`.
#[must_use]
pub fn dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `22nd`, ...
#[must_use]
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

const fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}

#[must_use]
pub fn role_summary(summary: &RoleSummary) -> String {
    let mut out = String::new();
    writeln!(out, "{}", summary.role.display_name()).unwrap();
    writeln!(out, "  Average:  {}", dollars(summary.average)).unwrap();
    writeln!(
        out,
        "  Range:    {} - {}",
        dollars(u64::from(summary.range.min)),
        dollars(u64::from(summary.range.max))
    ).unwrap();
    writeln!(
        out,
        "  Trend:    {} {} (up {}, down {}, stable {})",
        trend_arrow(summary.most_common_trend),
        summary.most_common_trend,
        summary.trends.up,
        summary.trends.down,
        summary.trends.stable
    ).unwrap();
    out
}

/// One line per location: position, place, range, and trend for `role`.
#[must_use]
pub fn location_table(locations: &[&Location], role: RoleKey) -> String {
    let mut out = String::new();
    for (i, loc) in locations.iter().enumerate() {
        let range = loc.role(role);
        writeln!(
            out,
            "{:>3}. {:<24} {:<3} {:>10} - {:<10} {}",
            i + 1,
            loc.city,
            loc.state_code,
            dollars(u64::from(range.min)),
            dollars(u64::from(range.max)),
            trend_arrow(range.trend)
        ).unwrap();
    }
    out
}

/// One line per location showing its value for `benefit`.
#[must_use]
pub fn benefit_table(locations: &[&Location], benefit: BenefitType) -> String {
    let mut out = String::new();
    for (i, loc) in locations.iter().enumerate() {
        let value = loc
            .benefit_value(benefit)
            .map_or_else(|| "-".to_string(), |v| benefit_value(benefit, v));
        writeln!(
            out,
            "{:>3}. {:<24} {:<3} {value}",
            i + 1,
            loc.city,
            loc.state_code
        ).unwrap();
    }
    out
}

fn benefit_value(benefit: BenefitType, value: f64) -> String {
    match benefit {
        BenefitType::PtoDays => format!("{value} days"),
        BenefitType::AutoAllowance => format!("${value}"),
        BenefitType::BonusPercent | BenefitType::FlexPercent | BenefitType::EsopPercent => {
            format!("{value}%")
        }
    }
}

#[must_use]
pub fn average_benefits(heading: &str, averages: &AverageBenefits) -> String {
    let mut out = String::new();
    writeln!(out, "{heading}").unwrap();
    for benefit in BenefitType::all() {
        writeln!(
            out,
            "  {:<16} {}",
            benefit.label(),
            benefit_value(*benefit, f64::from(averages.get(*benefit)))
        ).unwrap();
    }
    out
}

/// Horizontal histogram scaled so the fullest bucket spans [`BAR_WIDTH`].
#[must_use]
pub fn distribution(benefit: BenefitType, buckets: &[BenefitBucket]) -> String {
    let mut out = String::new();
    writeln!(out, "{}", benefit.label()).unwrap();
    if buckets.is_empty() {
        writeln!(out, "  (no locations report this benefit)").unwrap();
        return out;
    }

    let label_width = buckets.iter().map(|b| b.bucket.len()).max().unwrap_or(0);
    let peak = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bucket in buckets {
        let bar = "#".repeat(bucket.count * BAR_WIDTH / peak);
        writeln!(
            out,
            "  {:<label_width$}  {bar} {}",
            bucket.bucket, bucket.count
        ).unwrap();
    }
    out
}

#[must_use]
pub fn percentile(salary: f64, role: RoleKey, scope: &str, percentile: u8) -> String {
    format!(
        "${salary} as {} is in the {} percentile {scope}\n",
        role.display_name(),
        ordinal(percentile)
    )
}

#[must_use]
pub fn state_rank(state_name: &str, rank: &StateRank) -> String {
    let comparison = if rank.is_above_average {
        "at or above"
    } else {
        "below"
    };
    format!(
        "#{} of {} in {state_name} ({comparison} the state average)\n",
        rank.rank, rank.total
    )
}

#[must_use]
pub fn search(query: &str, result: &LocationSearch<'_>, role: RoleKey) -> String {
    let mut out = String::new();
    match &result.fallback {
        Some(fallback) => {
            writeln!(
                out,
                "'{}' isn't in our data. Showing {} location(s) in {}.",
                fallback.searched_city,
                result.locations.len(),
                fallback.state_name
            ).unwrap();
        }
        None if result.is_empty() => {
            writeln!(out, "No locations match '{query}'.").unwrap();
            return out;
        }
        None => {}
    }
    out.push_str(&location_table(&result.locations, role));
    out
}

/// One row per role with each compared location's range; `*` marks the
/// highest-paying location for that role.
#[must_use]
pub fn comparison(comparison: &LocationComparison<'_>) -> String {
    let mut out = String::new();
    write!(out, "{:<28}", "").unwrap();
    for loc in &comparison.locations {
        write!(out, " {:<24}", format!("{}, {}", loc.city, loc.state_code)).unwrap();
    }
    writeln!(out).unwrap();

    for leader in &comparison.leaders {
        write!(out, "{:<28}", leader.role.display_name()).unwrap();
        for (i, loc) in comparison.locations.iter().enumerate() {
            let range = loc.role(leader.role);
            let marker = if i == leader.index { "*" } else { " " };
            let cell = format!(
                "{} - {}{marker}",
                dollars(u64::from(range.min)),
                dollars(u64::from(range.max))
            );
            write!(out, " {cell:<24}").unwrap();
        }
        writeln!(out).unwrap();
    }
    out
}

fn signed_dollars(difference: i64) -> String {
    let sign = if difference < 0 { "-" } else { "+" };
    format!("{sign}{}", dollars(difference.unsigned_abs()))
}

#[must_use]
pub fn assessment(assessment: &SalaryAssessment<'_>) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} as {}",
        dollars(u64::from(assessment.salary)),
        assessment.role.display_name()
    )
    .unwrap();
    writeln!(
        out,
        "  Nationally:        {} percentile, {} vs average {}",
        ordinal(assessment.percentile),
        signed_dollars(assessment.national_difference),
        dollars(assessment.national_average)
    )
    .unwrap();
    writeln!(
        out,
        "  In {} ({} locations): {} percentile, {} vs average {}",
        assessment.state_name,
        assessment.state_location_count,
        ordinal(assessment.state_percentile),
        signed_dollars(assessment.state_difference),
        dollars(assessment.state_average)
    )
    .unwrap();
    let source = match assessment.local_max_source {
        LocalMaxSource::City => "city",
        LocalMaxSource::StateAverage => "state average",
    };
    writeln!(
        out,
        "  Local max:         {} ({source})",
        dollars(u64::from(assessment.local_max))
    )
    .unwrap();
    let top = assessment.top_location;
    writeln!(
        out,
        "  Top market:        {}, {} ({})",
        top.city,
        top.state_code,
        dollars(u64::from(top.role(assessment.role).max))
    )
    .unwrap();
    out
}
