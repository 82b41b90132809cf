//! Shared library for `gradecalc`
//! Contains the grade point engine, record loading, report export and the
//! configuration/logging layers used by the CLI.

pub mod core;
pub mod logger;

pub use core::{config, get_version};
