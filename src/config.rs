//! Runtime configuration assembled from the command line.

use crate::cli::Cli;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "wordle-sieve";
pub const ANSWERS_FILE_NAME: &str = "answers.txt";
pub const ALLOWED_FILE_NAME: &str = "allowed.txt";
pub const LOG_FILE_NAME: &str = "wordle-sieve.log";

pub const DEFAULT_ANSWERS_LIMIT: usize = 20;
pub const DEFAULT_ALLOWED_LIMIT: usize = 50;

/// How many words of each pool to show. The filter itself never truncates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub answers: usize,
    pub allowed: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            answers: DEFAULT_ANSWERS_LIMIT,
            allowed: DEFAULT_ALLOWED_LIMIT,
        }
    }
}

/// Where a word pool comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSource {
    File(PathBuf),
    Embedded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub answers: PoolSource,
    pub allowed: PoolSource,
    pub limits: DisplayLimits,
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            answers: PoolSource::Embedded,
            allowed: PoolSource::Embedded,
            limits: DisplayLimits::default(),
            verbose: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let data_dir = default_data_dir();
        let log_file = cli.log_file.clone().or_else(|| {
            // The TUI owns the terminal, so its logs need somewhere else to go.
            if cli.tui {
                data_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME))
            } else {
                None
            }
        });
        Self {
            answers: resolve_pool(cli.answers.as_ref(), data_dir.as_ref(), ANSWERS_FILE_NAME),
            allowed: resolve_pool(cli.allowed.as_ref(), data_dir.as_ref(), ALLOWED_FILE_NAME),
            limits: DisplayLimits {
                answers: cli.answers_limit,
                allowed: cli.allowed_limit,
            },
            verbose: cli.verbose,
            log_file,
        }
    }
}

/// `<data dir>/wordle-sieve`, e.g. `~/.local/share/wordle-sieve` on Linux.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Explicit path first, then a file in the data directory, then the
/// embedded list.
fn resolve_pool(explicit: Option<&PathBuf>, data_dir: Option<&PathBuf>, file_name: &str) -> PoolSource {
    if let Some(path) = explicit {
        return PoolSource::File(path.clone());
    }
    match data_dir.map(|dir| dir.join(file_name)) {
        Some(path) if path.is_file() => PoolSource::File(path),
        _ => PoolSource::Embedded,
    }
}
