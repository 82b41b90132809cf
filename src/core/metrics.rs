//! Grade point aggregation (SGPA, CGPA) and required-SGPA prediction.
//!
//! Every function here is pure: the same records always give the same
//! result. Rounding to two decimals happens once, on the final metric,
//! never on intermediate sums.

use crate::core::bands::{classify_band, Band, Thresholds, CGPA_BANDS, SGPA_BANDS};
use crate::core::error::EngineError;
use crate::core::grades::Grade;
use crate::core::models::{SemesterRecord, SubjectRecord};
use crate::{debug, info};
use serde::Serialize;
use std::fmt;

/// Which average an [`AggregateResult`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricKind {
    /// Semester grade point average over subjects
    Sgpa,
    /// Cumulative grade point average over semesters
    Cgpa,
}

impl MetricKind {
    /// Metric name as printed ("SGPA" / "CGPA")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sgpa => "SGPA",
            Self::Cgpa => "CGPA",
        }
    }

    /// Kind of row the metric aggregates ("SUBJECT" / "SEMESTER")
    #[must_use]
    pub const fn row_label(self) -> &'static str {
        match self {
            Self::Sgpa => "SUBJECT",
            Self::Cgpa => "SEMESTER",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One valid record's share of an aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    /// 1-based position among the valid records
    pub position: usize,
    /// Record name, or the default "Subject N" / "Semester N"
    pub label: String,
    /// Credit weight
    pub credits: f64,
    /// Letter grade (subjects only)
    pub grade: Option<Grade>,
    /// Grade points for a subject, SGPA for a semester
    pub points: f64,
    /// `credits * points`
    pub weighted_points: f64,
}

/// Result of an SGPA or CGPA computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Which metric this is
    pub kind: MetricKind,
    /// Weighted average rounded to 2 decimals
    pub value: f64,
    /// Sum of credits of the valid records
    pub total_credits: f64,
    /// Qualitative band of `value`
    pub band: Band,
    /// Valid records in roster order
    pub contributions: Vec<Contribution>,
}

/// Round half away from zero to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the SGPA of a set of subjects.
///
/// Subjects with a non-positive credit or without a recognized grade are
/// skipped; they never make the call fail as long as one subject is valid.
///
/// # Errors
///
/// Returns `EngineError::NoValidInput` if no subject is valid, or
/// `EngineError::TooLarge` if the credit or point totals overflow.
pub fn compute_sgpa(subjects: &[SubjectRecord]) -> Result<AggregateResult, EngineError> {
    let contributions: Vec<Contribution> = subjects
        .iter()
        .enumerate()
        .filter(|(idx, subject)| {
            let valid = subject.is_valid();
            if !valid {
                debug!("Skipping subject row {}: {subject:?}", idx + 1);
            }
            valid
        })
        .filter_map(|(_, subject)| subject.grade.map(|grade| (subject, grade)))
        .enumerate()
        .map(|(idx, (subject, grade))| {
            let points = f64::from(grade.points());
            Contribution {
                position: idx + 1,
                label: subject.label(idx + 1),
                credits: subject.credit,
                grade: Some(grade),
                points,
                weighted_points: subject.credit * points,
            }
        })
        .collect();

    aggregate(
        MetricKind::Sgpa,
        contributions,
        &SGPA_BANDS,
        "subject with credit and grade",
    )
}

/// Compute the CGPA of a set of semesters.
///
/// Semesters outside `0 < sgpa <= 10` or without credits are skipped.
///
/// # Errors
///
/// Returns `EngineError::NoValidInput` if no semester is valid, or
/// `EngineError::TooLarge` if the credit or point totals overflow.
pub fn compute_cgpa(semesters: &[SemesterRecord]) -> Result<AggregateResult, EngineError> {
    let contributions: Vec<Contribution> = semesters
        .iter()
        .enumerate()
        .filter(|(idx, semester)| {
            let valid = semester.is_valid();
            if !valid {
                debug!("Skipping semester row {}: {semester:?}", idx + 1);
            }
            valid
        })
        .enumerate()
        .map(|(idx, (_, semester))| {
            let credits = f64::from(semester.credits);
            Contribution {
                position: idx + 1,
                label: semester.label(idx + 1),
                credits,
                grade: None,
                points: semester.sgpa,
                weighted_points: semester.sgpa * credits,
            }
        })
        .collect();

    aggregate(
        MetricKind::Cgpa,
        contributions,
        &CGPA_BANDS,
        "semester with SGPA and credits",
    )
}

fn aggregate(
    kind: MetricKind,
    contributions: Vec<Contribution>,
    bands: &Thresholds<Band>,
    expected: &'static str,
) -> Result<AggregateResult, EngineError> {
    if contributions.is_empty() {
        return Err(EngineError::NoValidInput { kind: expected });
    }

    let total_points: f64 = contributions.iter().map(|c| c.weighted_points).sum();
    let total_credits: f64 = contributions.iter().map(|c| c.credits).sum();
    if !total_credits.is_finite() {
        return Err(EngineError::TooLarge {
            field: "Total credits",
        });
    }
    if !total_points.is_finite() {
        return Err(EngineError::TooLarge {
            field: "Total grade points",
        });
    }
    let value = round2(total_points / total_credits);

    info!(
        "{kind} computed: {value} over {total_credits} credits ({} records)",
        contributions.len()
    );

    Ok(AggregateResult {
        kind,
        value,
        total_credits,
        band: classify_band(value, bands),
        contributions,
    })
}

/// SGPA needed next semester to lift the CGPA to a target.
///
/// `required = (target * (earned + next) - current * earned) / next`,
/// rounded to 2 decimals. The result is not clamped: a value above 10
/// means the target cannot be reached with `next_sem_credits`.
///
/// # Errors
///
/// - `EngineError::InvalidInput` if any input is not strictly positive.
/// - `EngineError::OutOfRange` if the current or target CGPA exceeds 10.
/// - `EngineError::TargetBelowCurrent` if the target is below the current CGPA.
/// - `EngineError::TooLarge` if the credit totals overflow.
pub fn predict_required_sgpa(
    current_cgpa: f64,
    earned_credits: f64,
    target_cgpa: f64,
    next_sem_credits: f64,
) -> Result<f64, EngineError> {
    for (field, value) in [
        ("Current CGPA", current_cgpa),
        ("Earned credits", earned_credits),
        ("Target CGPA", target_cgpa),
        ("Next semester credits", next_sem_credits),
    ] {
        if !(value > 0.0 && value.is_finite()) {
            return Err(EngineError::InvalidInput { field });
        }
    }

    for (field, value) in [("Current CGPA", current_cgpa), ("Target CGPA", target_cgpa)] {
        if value > 10.0 {
            return Err(EngineError::OutOfRange { field, value });
        }
    }

    if target_cgpa < current_cgpa {
        return Err(EngineError::TargetBelowCurrent {
            current: current_cgpa,
            target: target_cgpa,
        });
    }

    #[allow(clippy::suboptimal_flops)]
    let required = (target_cgpa * (earned_credits + next_sem_credits)
        - current_cgpa * earned_credits)
        / next_sem_credits;
    if !required.is_finite() {
        return Err(EngineError::TooLarge {
            field: "Credit total",
        });
    }
    let required = round2(required);
    info!(
        "Required SGPA for target {target_cgpa} from {current_cgpa} over {earned_credits} credits: {required}"
    );
    Ok(required)
}
