//! CLI command handlers for `gradecalc`.
//!
//! Each subcommand lives in its own submodule. Handlers return a
//! ready-to-print error message so `main` decides the exit code.

pub mod cgpa;
pub mod config;
pub mod export;
pub mod grades;
pub mod predict;
pub mod sgpa;
