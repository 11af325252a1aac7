use serde::Serialize;

/// The five graded subjects, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
    English,
    ComputerScience,
}

impl Subject {
    /// All subjects, in the order they appear on the report card and in
    /// serialized output.
    pub const ALL: [Subject; 5] = [
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::English,
        Subject::ComputerScience,
    ];

    /// Label used for this subject in API responses.
    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::English => "English",
            Subject::ComputerScience => "Computer Science",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_match_report_labels() {
        let labels: Vec<&str> = Subject::ALL.iter().map(|s| s.display_name()).collect();
        assert_eq!(
            labels,
            vec![
                "Mathematics",
                "Physics",
                "Chemistry",
                "English",
                "Computer Science"
            ]
        );
    }
}
