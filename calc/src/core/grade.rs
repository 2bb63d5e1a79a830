//! Letter grades from numeric averages.

use std::fmt;

use serde::{Deserialize, Serialize};

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    AA,
    BA,
    BB,
    CB,
    CC,
    FF,
}

impl LetterGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::AA => "AA",
            LetterGrade::BA => "BA",
            LetterGrade::BB => "BB",
            LetterGrade::CB => "CB",
            LetterGrade::CC => "CC",
            LetterGrade::FF => "FF",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open band `[lower, upper)`, or `[lower, upper]` when `upper_inclusive`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub lower: f64,
    pub upper: f64,
    pub upper_inclusive: bool,
    pub grade: LetterGrade,
}

impl GradeBand {
    const fn new(lower: f64, upper: f64, upper_inclusive: bool, grade: LetterGrade) -> Self {
        Self {
            lower,
            upper,
            upper_inclusive,
            grade,
        }
    }

    pub fn contains(&self, average: f64) -> bool {
        let below_upper = if self.upper_inclusive {
            average <= self.upper
        } else {
            average < self.upper
        };
        average >= self.lower && below_upper
    }
}

/// Ordered, non-overlapping bands. Averages outside every band are `FF`.
pub const GRADE_BANDS: [GradeBand; 5] = [
    GradeBand::new(90.0, 100.0, true, LetterGrade::AA),
    GradeBand::new(80.0, 90.0, false, LetterGrade::BA),
    GradeBand::new(70.0, 80.0, false, LetterGrade::BB),
    GradeBand::new(60.0, 70.0, false, LetterGrade::CB),
    GradeBand::new(50.0, 60.0, false, LetterGrade::CC),
];

/// Map an average to its letter grade.
///
/// Above 100, below 50 and NaN all fall through to `FF`.
pub fn letter_grade(average: f64) -> LetterGrade {
    GRADE_BANDS
        .iter()
        .find(|band| band.contains(average))
        .map_or(LetterGrade::FF, |band| band.grade)
}
