//! Word lists: embedded defaults, files on disk, and history payloads.

use crate::config::{Config, PoolSource};
use crate::error::WordbankError;
use crate::history::HistoryPayload;
use crate::word::Word;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_ANSWERS: &str = include_str!("resources/answers.txt");
pub const EMBEDDED_ALLOWED: &str = include_str!("resources/allowed.txt");

fn parse_line(line: &str) -> Option<Word> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Word::parse(trimmed) {
        Ok(word) => Some(word),
        Err(e) => {
            debug!("skipping word list entry '{trimmed}': {e}");
            None
        }
    }
}

/// One word per line; blank and malformed lines are skipped, order is kept.
pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    data.lines().filter_map(parse_line).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

fn load_pool(pool: &PoolSource, embedded: &str) -> Result<Vec<Word>, WordbankError> {
    let words = match pool {
        PoolSource::File(path) => {
            load_wordbank_from_file(path).map_err(|source| WordbankError::Io {
                path: path.clone(),
                source,
            })?
        }
        PoolSource::Embedded => load_wordbank_from_str(embedded),
    };
    info!("loaded {} words from {:?}", words.len(), pool);
    Ok(words)
}

/// Load the answers pool and the allowed-guesses pool.
pub fn load_pools(config: &Config) -> Result<(Vec<Word>, Vec<Word>), WordbankError> {
    let answers = load_pool(&config.answers, EMBEDDED_ANSWERS)?;
    let allowed = load_pool(&config.allowed, EMBEDDED_ALLOWED)?;
    Ok((answers, allowed))
}

/// Read a `{"history": [...]}` JSON payload.
pub fn load_history_payload<P: AsRef<Path>>(path: P) -> Result<HistoryPayload, WordbankError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| WordbankError::HistoryRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| WordbankError::HistoryFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_str_normalizes_and_skips() {
        let words = load_wordbank_from_str("CRATE\n  slate \n\ncranes\ncr4ne\nIrAtE\n");
        let as_str: Vec<_> = words.iter().map(Word::as_str).collect();
        assert_eq!(as_str, vec!["crate", "slate", "irate"]);
    }

    #[test]
    fn test_load_from_str_keeps_order_and_duplicates() {
        let words = load_wordbank_from_str("grate\ncrate\ngrate\n");
        let as_str: Vec<_> = words.iter().map(Word::as_str).collect();
        assert_eq!(as_str, vec!["grate", "crate", "grate"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "GRAPE").unwrap();
        writeln!(file, "kiwi").unwrap();
        let words = load_wordbank_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1], "grape");
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(load_wordbank_from_file("/nonexistent/words.txt").is_err());
    }

    #[test]
    fn test_embedded_pools() {
        let (answers, allowed) = load_pools(&Config::default()).unwrap();
        assert!(!answers.is_empty());
        assert!(allowed.len() >= answers.len());
        // every answer is also an allowed guess
        assert!(answers.iter().all(|w| allowed.contains(w)));
    }

    #[test]
    fn test_load_pools_reports_missing_file() {
        let config = Config {
            answers: PoolSource::File("/nonexistent/answers.txt".into()),
            ..Config::default()
        };
        match load_pools(&config) {
            Err(WordbankError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/answers.txt"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_history_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"history":[{{"guess":"crate","feedback":"bgggg"}}]}}"#).unwrap();
        let payload = load_history_payload(file.path()).unwrap();
        assert_eq!(payload.history.len(), 1);
        assert_eq!(payload.history[0].guess, "crate");

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "not json").unwrap();
        assert!(matches!(
            load_history_payload(bad.path()),
            Err(WordbankError::HistoryFile { .. })
        ));
    }

    #[test]
    fn test_load_history_payload_missing_file() {
        match load_history_payload("/nonexistent/history.json") {
            Err(e @ WordbankError::HistoryRead { .. }) => {
                assert!(e.to_string().starts_with("failed to read history file"));
            }
            other => panic!("expected HistoryRead error, got {other:?}"),
        }
    }
}
