//! Guess/feedback history.

use crate::error::{SolveError, StepError};
use crate::feedback::FeedbackPattern;
use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One round as it arrives from outside, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStep {
    pub guess: String,
    pub feedback: String,
}

impl RawStep {
    pub fn new(guess: impl Into<String>, feedback: impl Into<String>) -> Self {
        Self {
            guess: guess.into(),
            feedback: feedback.into(),
        }
    }
}

/// Request payload shape: `{"history": [{"guess": ..., "feedback": ...}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPayload {
    #[serde(default)]
    pub history: Vec<RawStep>,
}

/// A validated round: the guess and the feedback the game gave for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryStep {
    pub guess: Word,
    pub feedback: FeedbackPattern,
}

impl HistoryStep {
    pub fn new(guess: Word, feedback: FeedbackPattern) -> Self {
        Self { guess, feedback }
    }

    /// Validate and normalize both fields. Casing is irrelevant.
    pub fn parse(guess: &str, feedback: &str) -> Result<Self, StepError> {
        Ok(Self {
            guess: Word::parse(guess.trim())?,
            feedback: FeedbackPattern::parse(feedback.trim())?,
        })
    }
}

impl TryFrom<&RawStep> for HistoryStep {
    type Error = StepError;

    fn try_from(raw: &RawStep) -> Result<Self, Self::Error> {
        Self::parse(&raw.guess, &raw.feedback)
    }
}

/// Accepts `GUESS:FEEDBACK` or `GUESS=FEEDBACK`, e.g. `crate:gybbb`.
impl FromStr for HistoryStep {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once([':', '='])
            .ok_or_else(|| StepError::Syntax(s.to_string()))?;
        Self::parse(guess, feedback)
    }
}

/// Rounds in the order they were played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    steps: Vec<HistoryStep>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every raw step. Any bad step rejects the whole history.
    pub fn from_raw(raw: &[RawStep]) -> Result<Self, SolveError> {
        let steps = raw
            .iter()
            .enumerate()
            .map(|(index, step)| {
                HistoryStep::try_from(step)
                    .map_err(|source| SolveError::InvalidHistoryStep { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn push(&mut self, step: HistoryStep) {
        self.steps.push(step);
    }

    /// Drop the most recent round.
    pub fn pop(&mut self) -> Option<HistoryStep> {
        self.steps.pop()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn last(&self) -> Option<&HistoryStep> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryStep> {
        self.steps.iter()
    }
}

impl From<Vec<HistoryStep>> for History {
    fn from(steps: Vec<HistoryStep>) -> Self {
        Self { steps }
    }
}

impl FromIterator<HistoryStep> for History {
    fn from_iter<I: IntoIterator<Item = HistoryStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryStep;
    type IntoIter = std::slice::Iter<'a, HistoryStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FeedbackError, WordError};

    #[test]
    fn test_step_parse_normalizes_case() {
        let upper = HistoryStep::parse("CRATE", "GGGGG").unwrap();
        let lower = HistoryStep::parse("crate", "ggggg").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.guess, "crate");
        assert!(upper.feedback.is_win());
    }

    #[test]
    fn test_step_from_str() {
        let step: HistoryStep = "Crane:XYGXX".parse().unwrap();
        assert_eq!(step.guess, "crane");
        assert_eq!(step.feedback.to_string(), "bygbb");

        let step: HistoryStep = "slate=bbbbg".parse().unwrap();
        assert_eq!(step.guess, "slate");

        assert_eq!(
            "crane".parse::<HistoryStep>(),
            Err(StepError::Syntax("crane".to_string()))
        );
    }

    #[test]
    fn test_from_raw_rejects_whole_history() {
        let raw = vec![
            RawStep::new("crate", "bbbbb"),
            RawStep::new("slat", "bbbbb"),
            RawStep::new("moist", "bbbbb"),
        ];
        assert_eq!(
            History::from_raw(&raw),
            Err(SolveError::InvalidHistoryStep {
                index: 1,
                source: StepError::Guess(WordError::WrongLength { len: 4 }),
            })
        );

        let raw = vec![RawStep::new("crate", "bbqbb")];
        assert_eq!(
            History::from_raw(&raw),
            Err(SolveError::InvalidHistoryStep {
                index: 0,
                source: StepError::Feedback(FeedbackError::UnknownSymbol { symbol: 'q' }),
            })
        );
    }

    #[test]
    fn test_history_preserves_order_and_undo() {
        let mut history = History::new();
        assert!(history.is_empty());
        history.push(HistoryStep::parse("crane", "bbbbb").unwrap());
        history.push(HistoryStep::parse("moist", "bybbb").unwrap());
        assert_eq!(history.len(), 2);
        let guesses: Vec<_> = history.iter().map(|s| s.guess.to_string()).collect();
        assert_eq!(guesses, vec!["crane", "moist"]);

        let undone = history.pop().unwrap();
        assert_eq!(undone.guess, "moist");
        assert_eq!(history.last().unwrap().guess, "crane");
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_payload_deserializes() {
        let json = r#"{"history":[{"guess":"CRATE","feedback":"GYBBB"}]}"#;
        let payload: HistoryPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.history, vec![RawStep::new("CRATE", "GYBBB")]);

        let empty: HistoryPayload = serde_json::from_str("{}").unwrap();
        assert!(empty.history.is_empty());
    }
}
