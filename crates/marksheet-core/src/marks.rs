//! Validated marks and the per-student mark set.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::error::MarkError;
use crate::subject::Subject;

/// A validated mark for one subject.
///
/// `Mark` is a newtype over `u8` that can only hold values in `[0, 100]`,
/// so arithmetic over marks never needs to re-check the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Mark(u8);

impl Mark {
    /// Highest mark a subject can score.
    pub const MAX_VALUE: u8 = 100;

    /// The zero mark, scored when a field is absent from a request.
    pub const ZERO: Mark = Mark(0);

    /// Create a mark from an integer, rejecting values outside `[0, 100]`.
    pub fn new(subject: Subject, value: i64) -> Result<Self, MarkError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX_VALUE)
            .map(Mark)
            .ok_or(MarkError::OutOfRange { subject, value })
    }

    /// Decode a mark from raw wire input.
    ///
    /// Missing or blank input scores zero. Anything else must parse as an
    /// integer in `[0, 100]`; surrounding whitespace is ignored.
    pub fn from_raw(subject: Subject, raw: Option<&str>) -> Result<Self, MarkError> {
        let Some(input) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Mark::ZERO);
        };
        let value = input
            .parse::<i64>()
            .map_err(|_| MarkError::InvalidFormat {
                subject,
                input: input.to_string(),
            })?;
        Mark::new(subject, value)
    }

    /// The mark as a plain integer.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full set of marks for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectMarks {
    pub mathematics: Mark,
    pub physics: Mark,
    pub chemistry: Mark,
    pub english: Mark,
    pub computer_science: Mark,
}

impl SubjectMarks {
    /// Assemble a mark set from already-validated marks.
    pub fn new(
        mathematics: Mark,
        physics: Mark,
        chemistry: Mark,
        english: Mark,
        computer_science: Mark,
    ) -> Self {
        Self {
            mathematics,
            physics,
            chemistry,
            english,
            computer_science,
        }
    }

    /// Mark recorded for `subject`.
    pub fn get(&self, subject: Subject) -> Mark {
        match subject {
            Subject::Mathematics => self.mathematics,
            Subject::Physics => self.physics,
            Subject::Chemistry => self.chemistry,
            Subject::English => self.english,
            Subject::ComputerScience => self.computer_science,
        }
    }

    /// Marks paired with their subject, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, Mark)> + '_ {
        Subject::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Sum of all five marks. Always in `[0, 500]`.
    pub fn total(&self) -> u16 {
        self.iter().map(|(_, mark)| u16::from(mark.value())).sum()
    }
}

/// Serializes as an object keyed by subject display name, in report order.
impl Serialize for SubjectMarks {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Subject::ALL.len()))?;
        for (subject, mark) in self.iter() {
            map.serialize_entry(subject.display_name(), &mark.value())?;
        }
        map.end()
    }
}
