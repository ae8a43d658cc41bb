//! Candidate filtering over the answers and allowed-guesses pools.

use crate::error::SolveError;
use crate::feedback::simulate;
use crate::history::{History, RawStep};
use crate::word::Word;
use log::debug;

/// True if `word` would have produced every recorded feedback.
pub fn is_consistent(word: &Word, history: &History) -> bool {
    history
        .iter()
        .all(|step| simulate(word, &step.guess) == step.feedback)
}

/// Keep the words of `pool` that are consistent with the whole history,
/// in their original order.
pub fn filter_candidates(pool: &[Word], history: &History) -> Vec<Word> {
    if history.is_empty() {
        return pool.to_vec();
    }
    pool.iter()
        .filter(|word| is_consistent(word, history))
        .copied()
        .collect()
}

/// Both pools after filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Words that can still be the answer.
    pub answers: Vec<Word>,
    /// Allowed guesses that still fit the feedback.
    pub allowed: Vec<Word>,
}

impl Solution {
    pub fn remaining_count(&self) -> usize {
        self.answers.len()
    }
}

/// Holds the two reference pools. They are never modified after construction,
/// so a `Solver` can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    answers: Vec<Word>,
    allowed: Vec<Word>,
}

impl Solver {
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        Self { answers, allowed }
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    pub fn solve(&self, history: &History) -> Solution {
        let answers = filter_candidates(&self.answers, history);
        let allowed = filter_candidates(&self.allowed, history);
        debug!(
            "solve: {} steps -> {}/{} answers, {}/{} allowed",
            history.len(),
            answers.len(),
            self.answers.len(),
            allowed.len(),
            self.allowed.len()
        );
        Solution { answers, allowed }
    }

    /// Normalize and validate raw steps, then solve. Any malformed step
    /// rejects the whole request.
    pub fn solve_raw(&self, raw: &[RawStep]) -> Result<Solution, SolveError> {
        let history = History::from_raw(raw)?;
        Ok(self.solve(&history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StepError, WordError};
    use crate::feedback::FeedbackPattern;
    use crate::history::HistoryStep;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    fn history(steps: &[(&str, &str)]) -> History {
        steps
            .iter()
            .map(|(g, f)| HistoryStep::parse(g, f).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_history_returns_pool() {
        let pool = words(&["crate", "crane", "grate"]);
        assert_eq!(filter_candidates(&pool, &History::new()), pool);
    }

    #[test]
    fn test_all_hits_keeps_only_guess() {
        let pool = words(&["crate", "crane", "grate"]);
        let filtered = filter_candidates(&pool, &history(&[("crate", "ggggg")]));
        assert_eq!(filtered, words(&["crate"]));
    }

    #[test]
    fn test_uppercase_history_matches_lowercase() {
        let pool = words(&["crate", "crane", "grate", "trace", "react"]);
        let upper = filter_candidates(&pool, &history(&[("CRATE", "BGGGG")]));
        let lower = filter_candidates(&pool, &history(&[("crate", "bgggg")]));
        assert_eq!(upper, lower);
        assert_eq!(upper, words(&["grate"]));
    }

    #[test]
    fn test_filter_preserves_order() {
        let pool = words(&["stare", "crate", "grate", "irate", "slate"]);
        // only the "?ate" words without 'p' or 'l' survive
        let h = history(&[("plate", "bbggg")]);
        assert_eq!(filter_candidates(&pool, &h), words(&["crate", "grate", "irate"]));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let pool = words(&["error", "rarer", "crate", "rower", "order", "racer"]);
        let h = history(&[("rarer", "ybgyg")]);
        let once = filter_candidates(&pool, &h);
        let twice = filter_candidates(&once, &h);
        assert_eq!(once, twice);
        assert!(once.contains(&Word::parse("error").unwrap()));
    }

    #[test]
    fn test_step_order_does_not_matter() {
        let pool = words(&["crate", "trace", "react", "cater", "caret", "grace"]);
        let target = Word::parse("react").unwrap();
        let g1 = Word::parse("trace").unwrap();
        let g2 = Word::parse("cater").unwrap();
        let s1 = HistoryStep::new(g1, simulate(&target, &g1));
        let s2 = HistoryStep::new(g2, simulate(&target, &g2));
        let forward = filter_candidates(&pool, &History::from(vec![s1, s2]));
        let backward = filter_candidates(&pool, &History::from(vec![s2, s1]));
        assert_eq!(forward, backward);
        assert!(forward.contains(&target));
    }

    #[test]
    fn test_contradictory_history_yields_nothing() {
        let pool = words(&["crate", "crane"]);
        let h = history(&[("crate", "ggggg"), ("crane", "ggggg")]);
        assert!(filter_candidates(&pool, &h).is_empty());
    }

    #[test]
    fn test_empty_pool() {
        let h = history(&[("crate", "ggggg")]);
        assert!(filter_candidates(&[], &h).is_empty());
    }

    #[test]
    fn test_solve_filters_both_pools_independently() {
        let solver = Solver::new(
            words(&["crate", "crane", "grate"]),
            words(&["crate", "crane", "grate", "crake", "craze"]),
        );
        let solution = solver.solve(&history(&[("crane", "gggbg")]));
        assert_eq!(solution.answers, words(&["crate"]));
        assert_eq!(solution.allowed, words(&["crate", "crake", "craze"]));
        assert_eq!(solution.remaining_count(), 1);
    }

    #[test]
    fn test_solve_raw_rejects_malformed_step() {
        let solver = Solver::new(words(&["crate"]), words(&["crate"]));
        let raw = vec![RawStep::new("crate", "ggggg"), RawStep::new("cr8te", "ggggg")];
        assert_eq!(
            solver.solve_raw(&raw),
            Err(SolveError::InvalidHistoryStep {
                index: 1,
                source: StepError::Guess(WordError::InvalidChar { ch: '8' }),
            })
        );
    }

    #[test]
    fn test_solve_raw_normalizes_case() {
        let solver = Solver::new(words(&["crate", "crane", "grate"]), words(&["crate"]));
        let solution = solver.solve_raw(&[RawStep::new("CRATE", "GGGGG")]).unwrap();
        assert_eq!(solution.answers, words(&["crate"]));
        assert_eq!(solution.allowed, words(&["crate"]));
    }

    #[test]
    fn test_is_consistent() {
        let word = Word::parse("error").unwrap();
        let h = History::from(vec![HistoryStep::new(
            Word::parse("rarer").unwrap(),
            FeedbackPattern::parse("ybgyg").unwrap(),
        )]);
        assert!(is_consistent(&word, &h));
        assert!(is_consistent(&word, &History::new()));
    }

    #[test]
    fn test_solver_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Solver>();
    }
}
