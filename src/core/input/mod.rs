//! Loading subject and semester rows from CSV files and CLI values.
//!
//! Parsing is lenient in the same way a form field is: a number that does not
//! parse becomes `0` and an unknown grade becomes "no grade". The row is still
//! loaded, and the engine later leaves it out of the aggregate.

pub mod csv_parser;

pub use csv_parser::{parse_semesters_csv, parse_subjects_csv};

use crate::core::error::InputError;
use crate::core::grades::Grade;
use crate::core::models::{SemesterRecord, SubjectRecord};
use crate::warn;

/// Parse a `NAME:CREDIT:GRADE` value (the name may be empty or omitted)
///
/// # Errors
/// Returns `InputError::InvalidInline` if the value has fewer than two fields.
pub fn parse_subject_arg(value: &str) -> Result<SubjectRecord, InputError> {
    let (name, credit, grade) = split_inline(value, "NAME:CREDIT:GRADE")?;
    Ok(SubjectRecord::new(
        name,
        lenient_f64(credit, "credit"),
        lenient_grade(grade),
    ))
}

/// Parse a `NAME:SGPA:CREDITS` value (the name may be empty or omitted)
///
/// # Errors
/// Returns `InputError::InvalidInline` if the value has fewer than two fields.
pub fn parse_semester_arg(value: &str) -> Result<SemesterRecord, InputError> {
    let (name, sgpa, credits) = split_inline(value, "NAME:SGPA:CREDITS")?;
    Ok(SemesterRecord::new(
        name,
        lenient_f64(sgpa, "sgpa"),
        lenient_u32(credits, "credits"),
    ))
}

/// Split from the right so names may themselves contain ':'.
fn split_inline<'a>(
    value: &'a str,
    expected: &'static str,
) -> Result<(Option<String>, &'a str, &'a str), InputError> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(last), Some(middle)) = (parts.next(), parts.next()) else {
        return Err(InputError::InvalidInline {
            value: value.to_string(),
            expected,
        });
    };
    let name = parts.next().map(str::to_string);
    Ok((name, middle.trim(), last.trim()))
}

pub(crate) fn lenient_f64(raw: &str, field: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>().unwrap_or_else(|_| {
        warn!("Could not parse {field} '{raw}', treating it as 0");
        0.0
    })
}

pub(crate) fn lenient_u32(raw: &str, field: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    raw.parse::<u32>().unwrap_or_else(|_| {
        warn!("Could not parse {field} '{raw}' as a whole number, treating it as 0");
        0
    })
}

pub(crate) fn lenient_grade(raw: &str) -> Option<Grade> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<Grade>()
        .map_err(|e| warn!("{e}; the subject will be left out"))
        .ok()
}
