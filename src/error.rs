//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A guess (or word bank entry) that is not a 5-letter word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected 5 letters, got {len}")]
    WrongLength { len: usize },
    #[error("'{ch}' is not a letter")]
    InvalidChar { ch: char },
}

/// A feedback string that is not 5 of `g`, `y`, `b`/`x`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("expected 5 feedback symbols, got {len}")]
    WrongLength { len: usize },
    #[error("unknown feedback symbol '{symbol}' (use G, Y or B)")]
    UnknownSymbol { symbol: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("bad guess: {0}")]
    Guess(#[from] WordError),
    #[error("bad feedback: {0}")]
    Feedback(#[from] FeedbackError),
    #[error("expected GUESS:FEEDBACK, got '{0}'")]
    Syntax(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The whole request is rejected; `index` is zero-based.
    #[error("invalid history step {}: {source}", .index + 1)]
    InvalidHistoryStep {
        index: usize,
        #[source]
        source: StepError,
    },
}

#[derive(Debug, Error)]
pub enum WordbankError {
    #[error("failed to read word list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read history file '{}': {source}", path.display())]
    HistoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse history file '{}': {source}", path.display())]
    HistoryFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
