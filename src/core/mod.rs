//! Core module: the grade point engine and everything the CLI builds on it

pub mod bands;
pub mod config;
pub mod error;
pub mod grades;
pub mod input;
pub mod metrics;
pub mod models;
pub mod report;

/// Returns the current version of the `gradecalc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
