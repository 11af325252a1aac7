//! # Marksheet Core
//!
//! Domain types for the marksheet result service. This crate provides the
//! calculation core: validated subject marks, the grading scale, and the
//! result summary computed from them.
//!
//! Everything here is pure and synchronous. The HTTP surface lives in
//! `marksheet-http`.

pub mod error;
pub mod marks;
pub mod subject;
pub mod summary;

pub use error::MarkError;
pub use marks::{Mark, SubjectMarks};
pub use subject::Subject;
pub use summary::{Grade, MAX_MARKS_PER_SUBJECT, ResultSummary, SUBJECTS_COUNT};
