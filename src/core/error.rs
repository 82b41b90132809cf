//! Error types for the grade point engine, rosters and record loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of an engine computation.
///
/// Every variant is recoverable: callers report it and ask for new input.
/// A target CGPA that cannot be reached with the given credit load is not an
/// error; `predict_required_sgpa` returns it as a value above 10.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// No record survived validation.
    #[error("Please add at least one valid {kind}.")]
    NoValidInput {
        /// Human description of the expected record, e.g. "subject with credit and grade".
        kind: &'static str,
    },

    /// A required field was zero, negative or not a number.
    #[error("{field} must be a positive value.")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A GPA-like value exceeded the 10 point scale.
    #[error("{field} cannot be greater than 10 (got {value}).")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was supplied.
        value: f64,
    },

    /// Credits or grade points are too large to sum without overflowing.
    #[error("{field} is too large to compute a result.")]
    TooLarge {
        /// Name of the quantity that overflowed.
        field: &'static str,
    },

    /// The target CGPA is below the current CGPA.
    #[error("Target CGPA ({target}) should be greater than or equal to current CGPA ({current}).")]
    TargetBelowCurrent {
        /// Current CGPA supplied.
        current: f64,
        /// Target CGPA supplied.
        target: f64,
    },
}

/// Failures of roster edits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// No row carries this id.
    #[error("No record with id {0}")]
    UnknownId(u64),

    /// The roster always keeps at least one row.
    #[error("Cannot remove the last remaining record")]
    LastRecord,
}

/// Failures while reading records from files or command-line values.
#[derive(Error, Debug)]
pub enum InputError {
    /// The roster file could not be read.
    #[error("Failed to read {path}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV.
    #[error("Malformed CSV in {path}")]
    Csv {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("No header row found in {0}")]
    MissingHeader(PathBuf),

    /// A required column is absent from the header.
    #[error("Missing required column '{column}' in {path}")]
    MissingColumn {
        /// File that was parsed.
        path: PathBuf,
        /// Column name that was expected.
        column: &'static str,
    },

    /// An inline record did not have the expected shape.
    #[error("Invalid record '{value}': expected {expected}")]
    InvalidInline {
        /// Raw value supplied.
        value: String,
        /// Description of the expected shape.
        expected: &'static str,
    },
}
