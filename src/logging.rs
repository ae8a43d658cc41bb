//! Logger setup plus chatty UI tracing macros that vanish in release builds.

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Initialize `env_logger`. `RUST_LOG` takes precedence over `verbose`.
///
/// With a `log_file` every record is appended there instead of stderr, which
/// keeps the terminal clean while the TUI is running.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{:<5}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second initialization (tests, embedding) is not an error worth surfacing.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sieve.log");
        init_logging(false, Some(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_logging_twice_is_fine() {
        init_logging(true, None).unwrap();
        init_logging(false, None).unwrap();
    }
}
