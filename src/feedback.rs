//! Feedback calculation for guesses.
//!
//! Computes the green/yellow/gray pattern the game shows for a guess against a
//! target word, using the standard two-pass rules so that repeated letters are
//! only credited as many times as they occur in the target.

use crate::WORD_LENGTH;
use crate::error::FeedbackError;
use crate::word::Word;
use std::fmt;
use std::str::FromStr;

const ALPHABET_SIZE: usize = 26;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in the correct position (green)
    Hit,
    /// Letter occurs elsewhere in the target (yellow)
    Present,
    /// Letter absent, or all its occurrences already used up (gray)
    Absent,
}

impl Feedback {
    /// Parse a symbol, case-insensitively: `g`, `y`, and `b` or `x`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Self::Hit),
            'y' => Some(Self::Present),
            'b' | 'x' => Some(Self::Absent),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Hit => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }
}

/// The full pattern for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub [Feedback; WORD_LENGTH]);

impl FeedbackPattern {
    pub const ALL_HITS: Self = Self([Feedback::Hit; WORD_LENGTH]);

    /// Parse a pattern like `"gybbb"`, `"GYXXG"` or `"GyBxg"`.
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(FeedbackError::WrongLength { len });
        }
        let mut symbols = [Feedback::Absent; WORD_LENGTH];
        for (slot, symbol) in symbols.iter_mut().zip(s.chars()) {
            *slot = Feedback::from_char(symbol).ok_or(FeedbackError::UnknownSymbol { symbol })?;
        }
        Ok(Self(symbols))
    }

    pub fn symbols(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    pub fn is_win(&self) -> bool {
        *self == Self::ALL_HITS
    }
}

impl FromStr for FeedbackPattern {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|fb| write!(f, "{}", fb.to_char()))
    }
}

fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Feedback the game would show for `guess` when the answer is `target`.
pub fn simulate(target: &Word, guess: &Word) -> FeedbackPattern {
    let target = target.letters();
    let guess = guess.letters();

    let mut feedback = [Feedback::Absent; WORD_LENGTH];
    let mut remaining = [0u8; ALPHABET_SIZE];

    // First pass: hits. Unmatched target letters go into the pool.
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            feedback[i] = Feedback::Hit;
        } else {
            remaining[letter_index(target[i])] += 1;
        }
    }

    // Second pass: presents, left to right, consuming the pool.
    for i in 0..WORD_LENGTH {
        if feedback[i] == Feedback::Hit {
            continue;
        }
        let idx = letter_index(guess[i]);
        if remaining[idx] > 0 {
            feedback[i] = Feedback::Present;
            remaining[idx] -= 1;
        }
    }

    FeedbackPattern(feedback)
}
