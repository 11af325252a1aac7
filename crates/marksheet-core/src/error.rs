//! Error types for mark decoding and validation.

use crate::subject::Subject;

/// Errors raised while decoding or validating subject marks.
///
/// Both variants carry the subject they were raised for, so an error
/// message always names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkError {
    /// Mark parsed as an integer but falls outside the allowed range.
    #[error("{subject} mark {value} is out of range (expected 0-100)")]
    OutOfRange { subject: Subject, value: i64 },

    /// Mark could not be parsed as an integer.
    #[error("{subject} mark '{input}' is not a valid integer")]
    InvalidFormat { subject: Subject, input: String },
}
