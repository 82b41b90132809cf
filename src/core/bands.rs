//! Qualitative classification of scores via ordered threshold tables.
//!
//! Three independent tables exist and must not be mixed up: SGPA messages,
//! CGPA messages, and the letter-grade equivalent of a required SGPA.

use crate::core::grades::Grade;
use serde::Serialize;
use std::fmt;

/// A qualitative tier attached to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    /// Short identifier (e.g. "excellent")
    pub tier: &'static str,
    /// Emoji shown in front of the message
    pub icon: &'static str,
    /// Human-readable message
    pub message: &'static str,
}

impl Band {
    const fn new(tier: &'static str, icon: &'static str, message: &'static str) -> Self {
        Self {
            tier,
            icon,
            message,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.message)
    }
}

/// Ordered `(threshold, value)` pairs, highest threshold first, plus the
/// value used when no threshold matches.
#[derive(Debug)]
pub struct Thresholds<T: 'static> {
    /// Tiers checked in order; the first with `score >= threshold` wins
    pub tiers: &'static [(f64, T)],
    /// Value for scores below every threshold
    pub floor: T,
}

/// Messages for a semester's SGPA
pub const SGPA_BANDS: Thresholds<Band> = Thresholds {
    tiers: &[
        (9.0, Band::new("excellent", "🎉", "Excellent! Outstanding performance!")),
        (8.0, Band::new("great", "🌟", "Great job! Keep up the good work!")),
        (7.0, Band::new("good", "👍", "Good performance! You're doing well!")),
        (6.0, Band::new("fair", "📚", "Fair performance. Room for improvement!")),
        (5.0, Band::new("average", "⚠️", "Average performance. Focus on weak subjects!")),
    ],
    floor: Band::new(
        "needs-improvement",
        "🚨",
        "Needs significant improvement. Don't give up!",
    ),
};

/// Messages for a cumulative CGPA
pub const CGPA_BANDS: Thresholds<Band> = Thresholds {
    tiers: &[
        (9.5, Band::new("outstanding", "🎓", "Outstanding! You're among the top performers!")),
        (9.0, Band::new("excellent", "🌟", "Excellent! Exceptional academic performance!")),
        (8.5, Band::new("very-good", "🎉", "Very Good! You're doing great!")),
        (8.0, Band::new("good", "👍", "Good performance! Keep it up!")),
        (7.0, Band::new("satisfactory", "📚", "Satisfactory. There's room for improvement!")),
        (6.0, Band::new("average", "⚠️", "Average performance. Focus on improvement!")),
    ],
    floor: Band::new("below-average", "🚨", "Below average. Time to work harder!"),
};

/// Letter grade a required SGPA corresponds to
pub const GRADE_EQUIVALENTS: Thresholds<Grade> = Thresholds {
    tiers: &[
        (9.5, Grade::APlus),
        (8.5, Grade::A),
        (7.5, Grade::BPlus),
        (6.5, Grade::B),
        (5.5, Grade::CPlus),
        (4.5, Grade::C),
        (4.0, Grade::D),
    ],
    floor: Grade::F,
};

/// Look `score` up in `table`, highest threshold first.
#[must_use]
pub fn classify_band<T: Copy>(score: f64, table: &Thresholds<T>) -> T {
    table
        .tiers
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map_or(table.floor, |(_, value)| *value)
}

/// How attainable a required SGPA is.
///
/// A value above 10 is a normal engine result meaning the target cannot be
/// reached with the planned credits; this is where it gets its wording.
#[must_use]
pub fn assess_required_sgpa(required: f64) -> Band {
    if required > 10.0 {
        Band::new(
            "unreachable",
            "❌",
            "Target not possible with given credits. Consider increasing credits or adjusting target.",
        )
    } else if required >= 9.0 {
        Band::new(
            "challenging",
            "🎯",
            "Challenging but achievable! You'll need excellent performance.",
        )
    } else if required >= 7.0 {
        Band::new(
            "achievable",
            "✅",
            "Achievable with consistent effort and good study habits.",
        )
    } else if required > 0.0 {
        Band::new("easy", "😊", "Easily achievable! You're on the right track.")
    } else {
        Band::new("invalid", "⚠️", "Invalid calculation. Please check your inputs.")
    }
}

/// Letter-grade equivalent of a required SGPA, only meaningful for `0 < required <= 10`
#[must_use]
pub fn equivalent_grade(required: f64) -> Option<Grade> {
    (required > 0.0 && required <= 10.0).then(|| classify_band(required, &GRADE_EQUIVALENTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgpa_thresholds_are_inclusive() {
        assert_eq!(classify_band(9.0, &SGPA_BANDS).tier, "excellent");
        assert_eq!(classify_band(8.99, &SGPA_BANDS).tier, "great");
        assert_eq!(classify_band(5.0, &SGPA_BANDS).tier, "average");
        assert_eq!(classify_band(4.99, &SGPA_BANDS).tier, "needs-improvement");
        assert_eq!(classify_band(0.0, &SGPA_BANDS).tier, "needs-improvement");
    }

    #[test]
    fn test_cgpa_table_is_separate() {
        // 8.6 lands in a different tier per table
        assert_eq!(classify_band(8.6, &SGPA_BANDS).tier, "great");
        assert_eq!(classify_band(8.6, &CGPA_BANDS).tier, "very-good");
        assert_eq!(classify_band(9.5, &CGPA_BANDS).tier, "outstanding");
        assert_eq!(classify_band(5.9, &CGPA_BANDS).tier, "below-average");
    }

    #[test]
    fn test_tables_are_descending() {
        for tiers in [SGPA_BANDS.tiers, CGPA_BANDS.tiers] {
            assert!(tiers.windows(2).all(|w| w[0].0 > w[1].0));
        }
        assert!(GRADE_EQUIVALENTS.tiers.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn test_grade_equivalents() {
        assert_eq!(equivalent_grade(10.0), Some(Grade::APlus));
        assert_eq!(equivalent_grade(9.49), Some(Grade::A));
        assert_eq!(equivalent_grade(7.5), Some(Grade::BPlus));
        assert_eq!(equivalent_grade(4.0), Some(Grade::D));
        assert_eq!(equivalent_grade(3.99), Some(Grade::F));
        assert_eq!(equivalent_grade(10.01), None);
        assert_eq!(equivalent_grade(0.0), None);
    }

    #[test]
    fn test_assess_required_sgpa() {
        assert_eq!(assess_required_sgpa(10.5).tier, "unreachable");
        assert_eq!(assess_required_sgpa(10.0).tier, "challenging");
        assert_eq!(assess_required_sgpa(7.0).tier, "achievable");
        assert_eq!(assess_required_sgpa(6.99).tier, "easy");
        assert_eq!(assess_required_sgpa(-1.0).tier, "invalid");
    }

    #[test]
    fn test_band_display() {
        let band = classify_band(9.1, &SGPA_BANDS);
        assert_eq!(band.to_string(), "🎉 Excellent! Outstanding performance!");
    }
}
