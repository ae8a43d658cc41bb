//! Command-line arguments and the line-based interactive front end.

use crate::config::{DEFAULT_ALLOWED_LIMIT, DEFAULT_ANSWERS_LIMIT};
use crate::error::SolveError;
use crate::feedback::FeedbackPattern;
use crate::history::{History, HistoryStep};
use crate::report::SolveReport;
use crate::session::{GameInterface, PoolInfo, UserAction};
use crate::word::Word;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Narrow down Wordle answers from guess/feedback history.
///
/// Feedback uses G (green), Y (yellow) and B or X (gray), in any case.
/// Without --step or --history-file an interactive session starts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Newline-delimited list of possible answers
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Newline-delimited list of allowed guesses
    #[arg(long)]
    pub allowed: Option<PathBuf>,

    /// One round as GUESS:FEEDBACK, e.g. crate:bgyyb (repeatable, in order)
    #[arg(short, long = "step", value_name = "GUESS:FEEDBACK")]
    pub steps: Vec<String>,

    /// JSON file shaped like {"history": [{"guess": "..", "feedback": ".."}]}
    #[arg(long, value_name = "FILE", conflicts_with = "steps")]
    pub history_file: Option<PathBuf>,

    /// Print the one-shot result as JSON
    #[arg(long)]
    pub json: bool,

    /// How many possible answers to show
    #[arg(long, default_value_t = DEFAULT_ANSWERS_LIMIT)]
    pub answers_limit: usize,

    /// How many allowed guesses to show
    #[arg(long, default_value_t = DEFAULT_ALLOWED_LIMIT)]
    pub allowed_limit: usize,

    /// Use the terminal UI instead of the line-based session
    #[arg(long)]
    pub tui: bool,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn is_one_shot(&self) -> bool {
        !self.steps.is_empty() || self.history_file.is_some()
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parse `--step` values. Any bad value rejects the whole history and is
/// reported with its position.
pub fn parse_steps(steps: &[String]) -> Result<History, SolveError> {
    steps
        .iter()
        .enumerate()
        .map(|(index, s)| {
            s.parse::<HistoryStep>()
                .map_err(|source| SolveError::InvalidHistoryStep { index, source })
        })
        .collect()
}

pub enum FeedbackInput {
    Valid(FeedbackPattern),
    Invalid(String),
    Cancel,
}

/// Reads one trimmed line; `None` at end of input.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

pub fn parse_guess_command(input: &str) -> UserAction {
    match input.to_ascii_lowercase().as_str() {
        "exit" | "quit" => UserAction::Exit,
        "next" | "new" => UserAction::NewGame,
        "undo" => UserAction::Undo,
        _ => UserAction::Guess(input.to_string()),
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter your guess (5 letters, or 'undo', 'next' for a new game, 'exit' to quit):");
    match read_trimmed_line(reader) {
        None => Some(UserAction::Exit),
        Some(input) if input.is_empty() => None,
        Some(input) => Some(parse_guess_command(&input)),
    }
}

pub fn read_feedback<R: BufRead>(reader: &mut R) -> FeedbackInput {
    println!("Enter feedback (G=green, Y=yellow, B=gray, e.g. GYBBG; empty line to cancel):");
    match read_trimmed_line(reader) {
        None => FeedbackInput::Cancel,
        Some(input) if input.is_empty() => FeedbackInput::Cancel,
        Some(input) => match FeedbackPattern::parse(&input) {
            Ok(pattern) => FeedbackInput::Valid(pattern),
            Err(e) => FeedbackInput::Invalid(e.to_string()),
        },
    }
}

pub fn display_report(history: &History, report: &SolveReport) {
    for (i, step) in history.iter().enumerate() {
        println!("  {}. {} {}", i + 1, step.guess, step.feedback);
    }
    println!("{report}");
}

/// CLI implementation of the GameInterface trait, reading from any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self, info: &PoolInfo) {
        println!(
            "Loaded {} possible answers and {} allowed guesses.",
            info.answers, info.allowed
        );
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        read_guess(&mut self.reader)
    }

    /// Re-prompts until the feedback parses or the player cancels.
    fn read_feedback(&mut self, guess: &Word) -> Option<FeedbackPattern> {
        loop {
            println!("Feedback for {guess}?");
            match read_feedback(&mut self.reader) {
                FeedbackInput::Valid(pattern) => return Some(pattern),
                FeedbackInput::Cancel => return None,
                FeedbackInput::Invalid(reason) => println!("Invalid feedback: {reason}"),
            }
        }
    }

    fn display_report(&mut self, history: &History, report: &SolveReport) {
        display_report(history, report);
    }

    fn display_error(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_no_candidates_message(&mut self) {
        println!("No candidates remain. Check your inputs.");
    }

    fn display_solution_found(&mut self, solution: &str) {
        println!("Solution found: {solution}");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }

    fn display_new_game_message(&mut self, info: &PoolInfo) {
        println!("New game started. {} possible answers.", info.answers);
    }
}
