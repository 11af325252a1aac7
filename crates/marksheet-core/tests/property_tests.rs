//! Property-based tests for the calculation core.
//!
//! These verify the invariants that must hold for every in-range mark set:
//! the total is the plain sum, the percentage stays inside [0, 100], and
//! the grade ladder is monotonic in the percentage.

use marksheet_core::{Grade, Mark, ResultSummary, Subject, SubjectMarks};
use proptest::prelude::*;

// Strategy for one full in-range mark set
fn marks_strategy() -> impl Strategy<Value = (u8, u8, u8, u8, u8)> {
    (0u8..=100, 0u8..=100, 0u8..=100, 0u8..=100, 0u8..=100)
}

fn subject_marks(m: u8, p: u8, c: u8, e: u8, cs: u8) -> SubjectMarks {
    let mark = |subject, value: u8| {
        Mark::new(subject, i64::from(value)).expect("in-range mark should validate")
    };
    SubjectMarks::new(
        mark(Subject::Mathematics, m),
        mark(Subject::Physics, p),
        mark(Subject::Chemistry, c),
        mark(Subject::English, e),
        mark(Subject::ComputerScience, cs),
    )
}

proptest! {
    /// Property: total is the sum of the five marks and percentage is bounded
    #[test]
    fn prop_total_and_percentage_bounds((m, p, c, e, cs) in marks_strategy()) {
        let summary = ResultSummary::compute("", "", subject_marks(m, p, c, e, cs));

        let expected: u16 = [m, p, c, e, cs].iter().map(|&v| u16::from(v)).sum();
        prop_assert_eq!(summary.total, expected);
        prop_assert!(summary.percentage >= 0.0);
        prop_assert!(summary.percentage <= 100.0);
    }

    /// Property: the grade ladder never improves as the percentage drops
    #[test]
    fn prop_grade_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (lower, higher) = if a <= b { (a, b) } else { (b, a) };

        // Grade orders best (A+) to worst (F), so a higher percentage must
        // compare less than or equal.
        prop_assert!(Grade::from_percentage(higher) <= Grade::from_percentage(lower));
    }

    /// Property: identical inputs always produce identical summaries
    #[test]
    fn prop_compute_is_deterministic((m, p, c, e, cs) in marks_strategy()) {
        let first = ResultSummary::compute("n", "r", subject_marks(m, p, c, e, cs));
        let second = ResultSummary::compute("n", "r", subject_marks(m, p, c, e, cs));
        prop_assert_eq!(first, second);
    }

    /// Property: every value outside [0, 100] is rejected, never clamped
    #[test]
    fn prop_out_of_range_is_rejected(value in prop_oneof![-10_000i64..0, 101i64..10_000]) {
        prop_assert!(Mark::new(Subject::Mathematics, value).is_err());
    }
}
