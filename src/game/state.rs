//! Per-session game entity.
//!
//! `GameState` owns the secret word, the revealed mask, the set of letters
//! already tried and the remaining attempts. All mutation goes through
//! [`GameState::apply_guess`], which never fails: user mistakes are reported
//! as a [`GuessOutcome`] and recorded as the round's last message.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::index;

use super::types::{GuessOutcome, HangmanError, MAX_ATTEMPTS, PLACEHOLDER};

// =========================================================================
// Prereveal policy
// =========================================================================

/// Default number of letters shown before the first guess:
/// `floor(len / 2) - 1`, never negative and never more than `len`.
pub fn prereveal_for(len: usize) -> usize {
    (len / 2).saturating_sub(1).min(len)
}

/// How many positions to reveal when a game is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrerevealPolicy {
    /// [`prereveal_for`] the word length.
    #[default]
    Half,
    /// A fixed count, clamped to the word length.
    Fixed(usize),
}

impl PrerevealPolicy {
    pub fn count_for(self, len: usize) -> usize {
        match self {
            PrerevealPolicy::Half => prereveal_for(len),
            PrerevealPolicy::Fixed(n) => n.min(len),
        }
    }
}

// =========================================================================
// Input validation
// =========================================================================

/// Normalize a submission to a single upper-case letter.
pub fn validate_letter(input: &str) -> Result<char, HangmanError> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(to_upper(c)),
        _ => Err(HangmanError::InvalidInput(input.to_string())),
    }
}

/// Fix a word to the game's case convention: trimmed and upper-cased with
/// the same mapping applied to guesses.
pub fn normalize_word(word: &str) -> String {
    word.trim().chars().map(to_upper).collect()
}

/// Single-char upper-case mapping; characters whose upper case expands to
/// several characters are kept as-is.
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// =========================================================================
// GameState
// =========================================================================

/// One in-progress or finished game.
#[derive(Clone, Debug)]
pub struct GameState {
    secret: Vec<char>,
    revealed: Vec<Option<char>>,
    guessed: BTreeSet<char>,
    attempts_remaining: u8,
    last_outcome: Option<GuessOutcome>,
    created_at: DateTime<Utc>,
}

impl GameState {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// Start a game for `word`, revealing `prereveal` distinct random
    /// positions (clamped to the word length). The word is normalized with
    /// [`normalize_word`] so guesses in either case match.
    pub fn create<R: Rng + ?Sized>(word: &str, prereveal: usize, rng: &mut R) -> Self {
        let secret: Vec<char> = normalize_word(word).chars().collect();
        let mut revealed = vec![None; secret.len()];
        let count = prereveal.min(secret.len());
        for i in index::sample(rng, secret.len(), count).into_iter() {
            revealed[i] = Some(secret[i]);
        }
        Self {
            secret,
            revealed,
            guessed: BTreeSet::new(),
            attempts_remaining: MAX_ATTEMPTS,
            last_outcome: None,
            created_at: Utc::now(),
        }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn secret_word(&self) -> String {
        self.secret.iter().collect()
    }

    /// The mask with [`PLACEHOLDER`] for hidden positions, e.g. `"_A_"`.
    pub fn masked_word(&self) -> String {
        self.revealed
            .iter()
            .map(|c| c.unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// The mask spaced for display, e.g. `"_ A _"`.
    pub fn display_word(&self) -> String {
        spaced(self.revealed.iter().map(|c| c.unwrap_or(PLACEHOLDER)))
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|c| c.is_some()).count()
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Letters submitted so far, in sorted order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    pub fn guessed_display(&self) -> String {
        spaced(self.guessed_letters())
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    /// Status text of the last submission, empty when there was none.
    pub fn last_message(&self) -> &'static str {
        self.last_outcome.map_or("", GuessOutcome::message)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // -----------------------------------------------------------------
    // Status
    // -----------------------------------------------------------------

    pub fn is_won(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    pub fn is_lost(&self) -> bool {
        self.attempts_remaining == 0 && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    // -----------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------

    /// Forget the previous round's message.
    pub fn clear_last_outcome(&mut self) {
        self.last_outcome = None;
    }

    /// Submit a guess. Repeated letters, malformed input and guesses after
    /// the game has ended change nothing but the last message.
    pub fn apply_guess(&mut self, input: &str) -> GuessOutcome {
        let outcome = if self.is_over() {
            GuessOutcome::GameOver
        } else {
            match self.try_guess(input) {
                Ok(outcome) => outcome,
                // try_guess only rejects malformed or repeated letters.
                Err(err) => err.guess_outcome().unwrap_or(GuessOutcome::InvalidInput),
            }
        };
        self.last_outcome = Some(outcome);
        outcome
    }

    fn try_guess(&mut self, input: &str) -> Result<GuessOutcome, HangmanError> {
        let letter = validate_letter(input)?;
        if !self.guessed.insert(letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        let mut hit = false;
        for (slot, &c) in self.revealed.iter_mut().zip(&self.secret) {
            if c == letter {
                *slot = Some(c);
                hit = true;
            }
        }

        if hit {
            Ok(GuessOutcome::Correct)
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            Ok(GuessOutcome::Incorrect)
        }
    }
}

fn spaced(chars: impl Iterator<Item = char>) -> String {
    let mut out = String::new();
    for c in chars {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

// =========================================================================
// Tests
// =========================================================================
