//! Grading scale and the computed result summary.

use serde::{Serialize, Serializer};

use crate::marks::{Mark, SubjectMarks};
use crate::subject::Subject;

/// Number of graded subjects on the report card.
pub const SUBJECTS_COUNT: u8 = Subject::ALL.len() as u8;

/// Maximum mark a single subject can score.
pub const MAX_MARKS_PER_SUBJECT: u8 = Mark::MAX_VALUE;

/// Letter grade derived from the overall percentage.
///
/// Variants are declared best to worst, so `Ord` ranks `APlus` lowest;
/// a higher percentage never yields a greater (worse) grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade for a percentage. Inclusive lower bounds, first match wins.
    pub fn from_percentage(percentage: f64) -> Grade {
        match percentage {
            p if p >= 90.0 => Grade::APlus,
            p if p >= 80.0 => Grade::A,
            p if p >= 70.0 => Grade::B,
            p if p >= 60.0 => Grade::C,
            p if p >= 50.0 => Grade::D,
            _ => Grade::F,
        }
    }

    /// The grade as its report-card letter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A computed result record for one student.
///
/// Constructed fresh per request and never stored. `percentage` keeps full
/// precision internally; it is rounded to two decimals only when serialized,
/// and the grade is always derived from the unrounded value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub name: String,
    pub roll_number: String,
    pub total: u16,
    #[serde(serialize_with = "two_decimal_places")]
    pub percentage: f64,
    pub grade: Grade,
    pub subjects_count: u8,
    pub max_marks_per_subject: u8,
    #[serde(rename = "subjects")]
    pub marks: SubjectMarks,
}

impl ResultSummary {
    /// Compute the summary for one student's marks.
    ///
    /// Pure and deterministic: the same marks always produce the same
    /// total, percentage, and grade.
    pub fn compute(
        name: impl Into<String>,
        roll_number: impl Into<String>,
        marks: SubjectMarks,
    ) -> Self {
        let total = marks.total();
        let max_total = u16::from(SUBJECTS_COUNT) * u16::from(MAX_MARKS_PER_SUBJECT);
        let percentage = f64::from(total) * 100.0 / f64::from(max_total);
        let grade = Grade::from_percentage(percentage);
        Self {
            name: name.into(),
            roll_number: roll_number.into(),
            total,
            percentage,
            grade,
            subjects_count: SUBJECTS_COUNT,
            max_marks_per_subject: MAX_MARKS_PER_SUBJECT,
            marks,
        }
    }
}

fn two_decimal_places<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 100.0).round() / 100.0)
}
