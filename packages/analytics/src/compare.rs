//! Side-by-side comparison of a handful of chosen locations.

use salary_map_analytics_models::{LocationComparison, RoleLeader};
use salary_map_salary_models::{Location, RoleKey};

/// Index of the location with the highest `role` midpoint. Ties go to the
/// earlier location.
fn leading_index(locations: &[&Location], role: RoleKey) -> usize {
    let mut best = 0;
    for (i, loc) in locations.iter().enumerate().skip(1) {
        if loc.midpoint(role) > locations[best].midpoint(role) {
            best = i;
        }
    }
    best
}

/// Compares `locations` role by role, marking the highest-paying one for
/// each role.
///
/// Returns `None` for an empty selection.
#[must_use]
pub fn compare_locations<'a>(locations: &[&'a Location]) -> Option<LocationComparison<'a>> {
    if locations.is_empty() {
        return None;
    }

    let leaders = RoleKey::all()
        .iter()
        .map(|&role| RoleLeader {
            role,
            index: leading_index(locations, role),
        })
        .collect();

    Some(LocationComparison {
        locations: locations.to_vec(),
        leaders,
    })
}
