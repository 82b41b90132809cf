//! CSV parser for subject and semester rosters
//!
//! Expected layouts (header row required, column order free, names matched
//! case-insensitively, `#` lines and blank lines ignored, fields may be
//! double-quoted to hold commas):
//!
//! ```text
//! name,credit,grade          name,sgpa,credits
//! Mathematics,4,A            Semester 1,8.2,20
//! ```

use super::{lenient_f64, lenient_grade, lenient_u32};
use crate::core::error::InputError;
use crate::core::models::{SemesterRecord, SubjectRecord};
use crate::info;
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::Path;

/// Parse a subjects CSV file
///
/// # Errors
/// Returns an error if the file cannot be read, has no header, or lacks the
/// `credit` or `grade` column.
pub fn parse_subjects_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SubjectRecord>, InputError> {
    let path = path.as_ref();
    let content = read(path)?;
    parse_subjects_str(&content, path)
}

/// Parse subjects from CSV text; `origin` is only used in error messages
///
/// # Errors
/// Returns an error if there is no header or a required column is missing.
pub fn parse_subjects_str(content: &str, origin: &Path) -> Result<Vec<SubjectRecord>, InputError> {
    let (headers, rows) = split_table(content, origin)?;
    let name_col = column(&headers, &["name", "subject"]);
    let credit_col = require(&headers, &["credit", "credits"], "credit", origin)?;
    let grade_col = require(&headers, &["grade"], "grade", origin)?;

    let subjects: Vec<SubjectRecord> = rows
        .iter()
        .map(|fields| {
            SubjectRecord::new(
                name_col.and_then(|idx| field(fields, idx)).map(str::to_string),
                field(fields, credit_col).map_or(0.0, |raw| lenient_f64(raw, "credit")),
                field(fields, grade_col).and_then(lenient_grade),
            )
        })
        .collect();

    info!("Loaded {} subjects from {}", subjects.len(), origin.display());
    Ok(subjects)
}

/// Parse a semesters CSV file
///
/// # Errors
/// Returns an error if the file cannot be read, has no header, or lacks the
/// `sgpa` or `credits` column.
pub fn parse_semesters_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SemesterRecord>, InputError> {
    let path = path.as_ref();
    let content = read(path)?;
    parse_semesters_str(&content, path)
}

/// Parse semesters from CSV text; `origin` is only used in error messages
///
/// # Errors
/// Returns an error if there is no header or a required column is missing.
pub fn parse_semesters_str(
    content: &str,
    origin: &Path,
) -> Result<Vec<SemesterRecord>, InputError> {
    let (headers, rows) = split_table(content, origin)?;
    let name_col = column(&headers, &["name", "semester"]);
    let sgpa_col = require(&headers, &["sgpa"], "sgpa", origin)?;
    let credits_col = require(&headers, &["credits", "credit"], "credits", origin)?;

    let semesters: Vec<SemesterRecord> = rows
        .iter()
        .map(|fields| {
            SemesterRecord::new(
                name_col.and_then(|idx| field(fields, idx)).map(str::to_string),
                field(fields, sgpa_col).map_or(0.0, |raw| lenient_f64(raw, "sgpa")),
                field(fields, credits_col).map_or(0, |raw| lenient_u32(raw, "credits")),
            )
        })
        .collect();

    info!("Loaded {} semesters from {}", semesters.len(), origin.display());
    Ok(semesters)
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Header fields and data rows, skipping blank and comment lines
fn split_table(
    content: &str,
    origin: &Path,
) -> Result<(Vec<String>, Vec<Vec<String>>), InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| InputError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let mut records = records.into_iter();
    let headers = records
        .next()
        .ok_or_else(|| InputError::MissingHeader(origin.to_path_buf()))?
        .into_iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();

    Ok((headers, records.collect()))
}

fn column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.iter().any(|alias| h == alias))
}

fn require(
    headers: &[String],
    aliases: &[&str],
    column_name: &'static str,
    origin: &Path,
) -> Result<usize, InputError> {
    column(headers, aliases).ok_or_else(|| InputError::MissingColumn {
        path: origin.to_path_buf(),
        column: column_name,
    })
}

fn field(fields: &[String], idx: usize) -> Option<&str> {
    fields.get(idx).map(String::as_str)
}
