#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! US state lookups shared by the analytics engine and the CLI.
//!
//! Every location in the dataset is grouped by its two-letter state code.
//! This crate maps those codes to display names and resolves free-text
//! state tokens ("texas", "penn", "Washington D.C.") back to codes.

pub mod states;

pub use states::{STATE_CODES, canonical_code, resolve_state, state_code_for_name, state_name};
