//! Canonical file paths for the bundled salary dataset.
//!
//! All paths are relative to the project root's `data/` directory unless
//! overridden through the environment.

use std::path::{Path, PathBuf};

/// Environment variable that overrides [`default_dataset_path`].
pub const DATASET_ENV_VAR: &str = "SALARY_MAP_DATASET";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`.
#[must_use]
pub fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Returns the `data/` directory path.
#[must_use]
pub fn data_dir() -> PathBuf {
    project_root().join("data")
}

/// Returns the dataset file to load when none is given explicitly.
///
/// Uses `$SALARY_MAP_DATASET` when it is set and non-empty, otherwise
/// `data/salaries.json`.
#[must_use]
pub fn default_dataset_path() -> PathBuf {
    match std::env::var(DATASET_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => data_dir().join("salaries.json"),
    }
}
