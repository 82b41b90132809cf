//! Subject model

use super::normalize_name;
use crate::core::grades::Grade;
use serde::{Deserialize, Serialize};

/// One subject row of an SGPA calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    /// Optional subject name (e.g., "Mathematics")
    pub name: Option<String>,

    /// Credit weight (can be fractional, e.g. 1.5)
    pub credit: f64,

    /// Letter grade; `None` when unset or unrecognized
    pub grade: Option<Grade>,
}

impl SubjectRecord {
    /// Create a new subject row
    ///
    /// # Arguments
    /// * `name` - Optional subject name; blank names are dropped
    /// * `credit` - Credit weight
    /// * `grade` - Letter grade, if known
    #[must_use]
    pub fn new(name: Option<String>, credit: f64, grade: Option<Grade>) -> Self {
        Self {
            name: normalize_name(name),
            credit,
            grade,
        }
    }

    /// Whether this row takes part in aggregation: positive credit and a known grade
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.credit.is_finite() && self.credit > 0.0 && self.grade.is_some()
    }

    /// Display label, falling back to "Subject N" for unnamed rows
    #[must_use]
    pub fn label(&self, position: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Subject {position}"))
    }
}
