//! Fixed-length lowercase words.

use crate::WORD_LENGTH;
use crate::error::WordError;
use std::fmt;
use std::str::FromStr;

/// A 5-letter word, always stored as lowercase ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, normalizing case. Surrounding whitespace is not trimmed.
    pub fn parse(s: &str) -> Result<Self, WordError> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::WrongLength { len });
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(s.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidChar { ch });
            }
            *slot = ch.to_ascii_lowercase() as u8;
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
