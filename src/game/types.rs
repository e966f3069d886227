//! Shared constants, guess outcomes, and the domain error type.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Incorrect guesses a player may make before losing.
pub const MAX_ATTEMPTS: u8 = 10;

/// Symbol shown for a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

// ---------------------------------------------------------------------------
// GuessOutcome
// ---------------------------------------------------------------------------

/// Result of the most recent submission in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessOutcome {
    /// The letter occurs in the secret word.
    Correct,
    /// The letter does not occur; one attempt was spent.
    Incorrect,
    /// The letter was submitted before; nothing changed.
    AlreadyTried,
    /// The submission was not exactly one character.
    InvalidInput,
    /// The game had already been won or lost.
    GameOver,
}

impl GuessOutcome {
    /// Player-facing status text.
    pub fn message(self) -> &'static str {
        match self {
            GuessOutcome::Correct => "correct",
            GuessOutcome::Incorrect => "incorrect",
            GuessOutcome::AlreadyTried => "already tried",
            GuessOutcome::InvalidInput => "invalid input",
            GuessOutcome::GameOver => "game over",
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// HangmanError
// ---------------------------------------------------------------------------

/// Domain errors for the game core and its data loading.
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    #[error("word bank is empty")]
    EmptyBank,

    #[error("word {index} in the word bank is empty")]
    EmptyWord { index: usize },

    #[error("not enough stage art: need {needed}, found {found}")]
    InsufficientStages { needed: usize, found: usize },

    #[error("attempts remaining out of range: {attempts} (max {max})")]
    IndexOutOfRange { attempts: u8, max: u8 },

    #[error("invalid input: expected a single letter, got {0:?}")]
    InvalidInput(String),

    #[error("letter already guessed: {0}")]
    AlreadyGuessed(char),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HangmanError {
    /// The outcome a rejected guess reports to the player, or `None` for
    /// errors that are not about the guess.
    pub fn guess_outcome(&self) -> Option<GuessOutcome> {
        match self {
            HangmanError::InvalidInput(_) => Some(GuessOutcome::InvalidInput),
            HangmanError::AlreadyGuessed(_) => Some(GuessOutcome::AlreadyTried),
            HangmanError::EmptyBank
            | HangmanError::EmptyWord { .. }
            | HangmanError::InsufficientStages { .. }
            | HangmanError::IndexOutOfRange { .. }
            | HangmanError::Io { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
