//! Semester model

use super::normalize_name;
use serde::{Deserialize, Serialize};

/// One completed semester of a CGPA calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterRecord {
    /// Optional semester name (e.g., "Fall 2025")
    pub name: Option<String>,

    /// SGPA earned in the semester, on the 10 point scale
    pub sgpa: f64,

    /// Credits registered in the semester
    pub credits: u32,
}

impl SemesterRecord {
    /// Create a new semester row
    #[must_use]
    pub fn new(name: Option<String>, sgpa: f64, credits: u32) -> Self {
        Self {
            name: normalize_name(name),
            sgpa,
            credits,
        }
    }

    /// Whether this row takes part in aggregation: `0 < sgpa <= 10` and credits > 0
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.sgpa > 0.0 && self.sgpa <= 10.0 && self.credits > 0
    }

    /// Display label, falling back to "Semester N" for unnamed rows
    #[must_use]
    pub fn label(&self, position: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Semester {position}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_bounds() {
        assert!(SemesterRecord::new(None, 10.0, 20).is_valid());
        assert!(SemesterRecord::new(None, 0.01, 1).is_valid());
        assert!(!SemesterRecord::new(None, 0.0, 20).is_valid());
        assert!(!SemesterRecord::new(None, 10.01, 20).is_valid());
        assert!(!SemesterRecord::new(None, 8.0, 0).is_valid());
        assert!(!SemesterRecord::new(None, f64::NAN, 20).is_valid());
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(SemesterRecord::new(None, 8.0, 20).label(2), "Semester 2");
        assert_eq!(
            SemesterRecord::new(Some("Spring".to_string()), 8.0, 20).label(2),
            "Spring"
        );
    }
}
