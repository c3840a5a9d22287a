#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line explorer for the salary dataset.
//!
//! ```text
//! salary_map summary [--role director] [--state TX]
//! salary_map percentile 175000 [--role director] [--state TX]
//! salary_map rank 175000 TX [--role director]
//! salary_map top [--role director] [--limit 10]
//! salary_map lowest [--role director] [--limit 10]
//! salary_map benefits [--state TX]
//! salary_map distribution ptoDays
//! salary_map top-benefit bonusPercent [--limit 10]
//! salary_map search "El Paso, TX"
//! salary_map states
//! salary_map compare "Austin, TX" "Chicago, IL" ["Denver, CO"]
//! salary_map assess 175000 TX [--city Dallas] [--role director]
//! ```
//!
//! Every subcommand accepts `--json` for machine-readable output and
//! `--dataset <PATH>` to load something other than the bundled dataset.

mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use salary_map_analytics::SalaryAnalytics;
use salary_map_dataset::{load_dataset, paths};
use salary_map_geography_models::resolve_state;
use salary_map_salary_models::{BenefitType, RoleKey};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "salary_map",
    about = "Explore preconstruction salaries and benefits by location"
)]
struct Cli {
    /// Dataset JSON file (defaults to $SALARY_MAP_DATASET, then data/salaries.json)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Print results as pretty JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// National (or state) averages, range, and trend for a role
    Summary {
        /// Role key, e.g. director, seniorManager, junior
        #[arg(long, default_value = "director")]
        role: RoleKey,
        /// Restrict to one state (code or name)
        #[arg(long)]
        state: Option<String>,
    },
    /// Percentile of a salary among location midpoints
    Percentile {
        /// Annual salary in dollars
        #[arg(value_parser = finite_salary)]
        salary: f64,
        #[arg(long, default_value = "director")]
        role: RoleKey,
        /// Compare within one state instead of nationally
        #[arg(long)]
        state: Option<String>,
    },
    /// Rank of a salary among a state's locations
    Rank {
        /// Annual salary in dollars
        #[arg(value_parser = finite_salary)]
        salary: f64,
        /// State code or name
        state: String,
        #[arg(long, default_value = "director")]
        role: RoleKey,
    },
    /// Highest-paying locations
    Top {
        #[arg(long, default_value = "director")]
        role: RoleKey,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Lowest-paying locations
    Lowest {
        #[arg(long, default_value = "director")]
        role: RoleKey,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Average benefits nationally or for one state
    Benefits {
        #[arg(long)]
        state: Option<String>,
    },
    /// Histogram of one benefit across locations
    Distribution {
        /// Benefit key: ptoDays, bonusPercent, flexPercent, esopPercent, autoAllowance
        benefit: BenefitType,
    },
    /// Locations offering the most of one benefit
    TopBenefit {
        benefit: BenefitType,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Search by city or state, falling back to the whole state
    Search {
        query: String,
        /// Role whose salaries are shown next to each result
        #[arg(long, default_value = "director")]
        role: RoleKey,
    },
    /// States in the dataset with location counts
    States,
    /// Side-by-side salaries for two or three locations
    Compare {
        /// Locations as "City, ST"
        #[arg(num_args = 2..=3, required = true)]
        locations: Vec<String>,
    },
    /// Where a salary stands nationally, in its state, and in its city
    Assess {
        /// Annual salary in whole dollars
        salary: u32,
        /// State code or name
        state: String,
        /// City within the state for the local max
        #[arg(long)]
        city: Option<String>,
        #[arg(long, default_value = "director")]
        role: RoleKey,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateSummary<'a> {
    state_code: &'a str,
    role: RoleKey,
    average: u64,
    average_all_roles: u64,
    range: salary_map_analytics::models::SalaryEnvelope,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateCount<'a> {
    state_code: &'a str,
    state_name: &'a str,
    locations: usize,
}

#[derive(Serialize)]
struct PercentileResult<'a> {
    salary: f64,
    role: RoleKey,
    state: Option<&'a str>,
    percentile: u8,
}

/// Prints `value` as pretty JSON when `json` is set, otherwise `text()`.
fn emit<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

/// Accepts `TX`, `tx`, `Texas`, or a fuzzy prefix like `tex`.
fn state_arg(input: &str) -> String {
    resolve_state(input).map_or_else(
        || {
            log::debug!("'{input}' is not a recognized state, using it as a raw code");
            input.trim().to_uppercase()
        },
        str::to_string,
    )
}

fn finite_salary(input: &str) -> Result<f64, String> {
    let salary: f64 = input.trim().parse().map_err(|e| format!("{e}"))?;
    if salary.is_finite() {
        Ok(salary)
    } else {
        Err(format!("'{input}' is not a finite salary"))
    }
}

/// Splits `"City, ST"` on its last comma, resolving the state part.
fn city_state_arg(input: &str) -> Option<(String, String)> {
    let (city, state) = input.rsplit_once(',')?;
    let city = city.trim();
    if city.is_empty() || state.trim().is_empty() {
        return None;
    }
    Some((city.to_string(), state_arg(state)))
}

fn no_state_data(state_code: &str) -> ! {
    eprintln!("No locations found for state: {state_code}");
    std::process::exit(1);
}

#[allow(clippy::too_many_lines)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let path = cli.dataset.unwrap_or_else(paths::default_dataset_path);
    let analytics = SalaryAnalytics::new(load_dataset(&path)?)?;
    let json = cli.json;

    match cli.command {
        Commands::Summary { role, state: None } => {
            let summary = analytics.role_summary(role);
            emit(json, &summary, || output::role_summary(&summary))?;
        }
        Commands::Summary {
            role,
            state: Some(state),
        } => {
            let code = state_arg(&state);
            let (Some(average), Some(average_all_roles), Some(range)) = (
                analytics.state_average_salary(&code, role),
                analytics.state_average_salary_all_roles(&code),
                analytics.state_salary_range(&code, role),
            ) else {
                no_state_data(&code);
            };
            let summary = StateSummary {
                state_code: &code,
                role,
                average,
                average_all_roles,
                range,
            };
            emit(json, &summary, || {
                format!(
                    "{} in {}\n  Average:            {}\n  Average range:      {} - {}\n  All-role average:   {}\n",
                    role.display_name(),
                    analytics.state_name(&code),
                    output::dollars(average),
                    output::dollars(u64::from(range.min)),
                    output::dollars(u64::from(range.max)),
                    output::dollars(average_all_roles),
                )
            })?;
        }
        Commands::Percentile {
            salary,
            role,
            state,
        } => {
            let code = state.as_deref().map(state_arg);
            let Some(percentile) = analytics.salary_percentile_in(salary, role, code.as_deref())
            else {
                no_state_data(code.as_deref().unwrap_or_default());
            };
            let scope = code.as_deref().map_or_else(
                || "nationally".to_string(),
                |c| format!("in {}", analytics.state_name(c)),
            );
            let result = PercentileResult {
                salary,
                role,
                state: code.as_deref(),
                percentile,
            };
            emit(json, &result, || {
                output::percentile(salary, role, &scope, percentile)
            })?;
        }
        Commands::Rank {
            salary,
            state,
            role,
        } => {
            let code = state_arg(&state);
            let Some(rank) = analytics.state_salary_rank(salary, role, &code) else {
                no_state_data(&code);
            };
            emit(json, &rank, || {
                output::state_rank(analytics.state_name(&code), &rank)
            })?;
        }
        Commands::Top { role, limit } => {
            let top = analytics.top_paying_locations(role, limit);
            emit(json, &top, || output::location_table(&top, role))?;
        }
        Commands::Lowest { role, limit } => {
            let lowest = analytics.lowest_paying_locations(role, limit);
            emit(json, &lowest, || output::location_table(&lowest, role))?;
        }
        Commands::Benefits { state: None } => {
            let averages = analytics.national_average_benefits();
            emit(json, &averages, || {
                output::average_benefits("National average benefits", &averages)
            })?;
        }
        Commands::Benefits { state: Some(state) } => {
            let code = state_arg(&state);
            let Some(averages) = analytics.state_average_benefits(&code) else {
                no_state_data(&code);
            };
            emit(json, &averages, || {
                output::average_benefits(
                    &format!("Average benefits in {}", analytics.state_name(&code)),
                    &averages,
                )
            })?;
        }
        Commands::Distribution { benefit } => {
            let buckets = analytics.benefit_distribution(benefit);
            emit(json, &buckets, || output::distribution(benefit, &buckets))?;
        }
        Commands::TopBenefit { benefit, limit } => {
            let top = analytics.top_locations_by_benefit(benefit, limit);
            emit(json, &top, || output::benefit_table(&top, benefit))?;
        }
        Commands::Search { query, role } => {
            let result = analytics.search_locations_with_fallback(&query);
            emit(json, &result, || output::search(&query, &result, role))?;
        }
        Commands::States => {
            let counts = analytics.location_count_by_state();
            let states: Vec<StateCount<'_>> = counts
                .iter()
                .map(|(code, &locations)| StateCount {
                    state_code: code,
                    state_name: analytics.state_name(code),
                    locations,
                })
                .collect();
            emit(json, &states, || {
                states
                    .iter()
                    .map(|s| format!("{:<3} {:<24} {}\n", s.state_code, s.state_name, s.locations))
                    .collect()
            })?;
        }
        Commands::Compare { locations } => {
            let mut selected = Vec::with_capacity(locations.len());
            for input in &locations {
                let found = city_state_arg(input)
                    .and_then(|(city, code)| analytics.location_by_city(&city, &code));
                let Some(location) = found else {
                    eprintln!("Location not found: {input} (expected \"City, ST\")");
                    std::process::exit(1);
                };
                selected.push(location);
            }
            let Some(comparison) = salary_map_analytics::compare::compare_locations(&selected)
            else {
                eprintln!("No locations to compare");
                std::process::exit(1);
            };
            emit(json, &comparison, || output::comparison(&comparison))?;
        }
        Commands::Assess {
            salary,
            state,
            city,
            role,
        } => {
            let code = state_arg(&state);
            let Some(assessment) = analytics.assess_salary(salary, role, &code, city.as_deref())
            else {
                no_state_data(&code);
            };
            emit(json, &assessment, || output::assessment(&assessment))?;
        }
    }

    Ok(())
}
