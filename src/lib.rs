//! Narrow down Wordle answers from a history of guesses and their feedback.
//!
//! The only real logic lives in [`feedback::simulate`] and
//! [`solver::filter_candidates`]; everything else is plumbing around them.

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod history;
pub mod logging;
pub mod report;
pub mod session;
pub mod solver;
pub mod tui;
pub mod wordbank;
pub mod word;

/// Letters per word.
pub const WORD_LENGTH: usize = 5;

// Re-export commonly used items for easier testing
pub use error::{FeedbackError, SolveError, StepError, WordError, WordbankError};
pub use feedback::{Feedback, FeedbackPattern, simulate};
pub use history::{History, HistoryPayload, HistoryStep, RawStep};
pub use report::SolveReport;
pub use session::game_loop;
pub use solver::{Solution, Solver, filter_candidates, is_consistent};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
pub use word::Word;
