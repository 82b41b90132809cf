//! Letter grades and the fixed grade point scale

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade on the 10 point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 10 points
    #[serde(rename = "A+")]
    APlus,
    /// 9 points
    #[serde(rename = "A")]
    A,
    /// 8 points
    #[serde(rename = "B+")]
    BPlus,
    /// 7 points
    #[serde(rename = "B")]
    B,
    /// 6 points
    #[serde(rename = "C+")]
    CPlus,
    /// 5 points
    #[serde(rename = "C")]
    C,
    /// 4 points
    #[serde(rename = "D")]
    D,
    /// 0 points
    #[serde(rename = "F")]
    F,
}

/// The grade scale, highest grade first.
pub const GRADE_SCALE: [(Grade, u8); 8] = [
    (Grade::APlus, 10),
    (Grade::A, 9),
    (Grade::BPlus, 8),
    (Grade::B, 7),
    (Grade::CPlus, 6),
    (Grade::C, 5),
    (Grade::D, 4),
    (Grade::F, 0),
];

impl Grade {
    /// Point value of this grade
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::APlus => 10,
            Self::A => 9,
            Self::BPlus => 8,
            Self::B => 7,
            Self::CPlus => 6,
            Self::C => 5,
            Self::D => 4,
            Self::F => 0,
        }
    }

    /// Letter as written on a transcript (e.g. "B+")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GRADE_SCALE
            .iter()
            .map(|(grade, _)| *grade)
            .find(|grade| grade.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown grade: '{s}'"))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
