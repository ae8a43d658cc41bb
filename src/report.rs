//! What gets shown to the player after a solve.

use crate::config::DisplayLimits;
use crate::solver::Solution;
use serde::Serialize;
use std::fmt;

/// Same shape as the JSON the solve endpoint used to return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Number of possible answers before truncation.
    pub remaining_count: usize,
    /// First possible answers, up to the display limit.
    pub answers: Vec<String>,
    /// First allowed guesses that still fit, up to the display limit.
    pub allowed: Vec<String>,
    #[serde(skip)]
    pub allowed_count: usize,
}

impl SolveReport {
    pub fn new(solution: &Solution, limits: &DisplayLimits) -> Self {
        Self {
            remaining_count: solution.remaining_count(),
            answers: solution
                .answers
                .iter()
                .take(limits.answers)
                .map(ToString::to_string)
                .collect(),
            allowed: solution
                .allowed
                .iter()
                .take(limits.allowed)
                .map(ToString::to_string)
                .collect(),
            allowed_count: solution.allowed.len(),
        }
    }

    /// The single remaining answer, if exactly one is left.
    pub fn solved_word(&self) -> Option<&str> {
        match (self.remaining_count, self.answers.first()) {
            (1, Some(word)) => Some(word.as_str()),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Remaining: {}", self.remaining_count)?;
        writeln!(f, "Try this: {}", self.answers.join(", "))?;
        write!(
            f,
            "Possible solutions ({}): {}",
            self.allowed_count,
            self.allowed.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    #[test]
    fn test_report_truncates_but_counts_everything() {
        let solution = Solution {
            answers: words(&["crate", "crane", "grate"]),
            allowed: words(&["crate", "crane", "grate", "crake", "craze"]),
        };
        let report = SolveReport::new(&solution, &DisplayLimits { answers: 2, allowed: 3 });
        assert_eq!(report.remaining_count, 3);
        assert_eq!(report.answers, vec!["crate", "crane"]);
        assert_eq!(report.allowed, vec!["crate", "crane", "grate"]);
        assert_eq!(report.allowed_count, 5);
        assert_eq!(report.solved_word(), None);
    }

    #[test]
    fn test_solved_word() {
        let solution = Solution {
            answers: words(&["crate"]),
            allowed: words(&["crate", "crake"]),
        };
        let report = SolveReport::new(&solution, &DisplayLimits::default());
        assert_eq!(report.solved_word(), Some("crate"));
    }

    #[test]
    fn test_json_shape() {
        let solution = Solution {
            answers: words(&["crate"]),
            allowed: words(&["crate"]),
        };
        let report = SolveReport::new(&solution, &DisplayLimits::default());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["remaining_count"], 1);
        assert_eq!(value["answers"][0], "crate");
        assert_eq!(value["allowed"][0], "crate");
        assert!(value.get("allowed_count").is_none());
    }

    #[test]
    fn test_display() {
        let solution = Solution {
            answers: words(&["crate", "grate"]),
            allowed: words(&["crate"]),
        };
        let text = SolveReport::new(&solution, &DisplayLimits::default()).to_string();
        assert!(text.contains("Remaining: 2"));
        assert!(text.contains("crate, grate"));
        assert!(text.contains("Possible solutions (1): crate"));
    }
}
