//! One request/response cycle of the game.
//!
//! `RoundController` resolves the caller's game through the [`SessionStore`],
//! applies at most one submission and returns a [`RoundResult`] snapshot for
//! the presentation layer. The whole round runs inside the store's lock.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use super::session::SessionStore;
use super::state::{GameState, PrerevealPolicy};
use super::types::{GuessOutcome, HangmanError};
use super::word_bank::WordBank;

/// Session used by callers that did not identify themselves. All of them
/// share one game.
pub const DEFAULT_SESSION_ID: &str = "default";

// =========================================================================
// RoundResult
// =========================================================================

/// Render-ready snapshot of a game after a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// Revealed mask spaced for display, e.g. `"_ A _"`.
    pub revealed_word: String,
    pub attempts_remaining: u8,
    pub won: bool,
    pub lost: bool,
    /// The secret word, for the end-of-game reveal.
    pub secret_word: String,
    /// Letters tried so far, sorted and space separated.
    pub guessed_letters: String,
    pub outcome: Option<GuessOutcome>,
    pub last_message: String,
    pub stage: String,
    /// When the session's current game was dealt.
    pub created_at: DateTime<Utc>,
}

impl RoundResult {
    fn snapshot(game: &GameState, bank: &WordBank) -> Result<Self, HangmanError> {
        Ok(Self {
            revealed_word: game.display_word(),
            attempts_remaining: game.attempts_remaining(),
            won: game.is_won(),
            lost: game.is_lost(),
            secret_word: game.secret_word(),
            guessed_letters: game.guessed_display(),
            outcome: game.last_outcome(),
            last_message: game.last_message().to_string(),
            stage: bank.stage_for(game.attempts_remaining())?.to_string(),
            created_at: game.created_at(),
        })
    }

    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }
}

// =========================================================================
// RoundController
// =========================================================================

/// Plays rounds against an injected word bank, session store and random
/// source.
pub struct RoundController {
    bank: Arc<WordBank>,
    sessions: Arc<SessionStore>,
    rng: Mutex<StdRng>,
    prereveal: PrerevealPolicy,
}

impl RoundController {
    pub fn new(
        bank: Arc<WordBank>,
        sessions: Arc<SessionStore>,
        rng: StdRng,
        prereveal: PrerevealPolicy,
    ) -> Self {
        Self {
            bank,
            sessions,
            rng: Mutex::new(rng),
            prereveal,
        }
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Play one round for `session_id`, applying `submitted` if present.
    ///
    /// Only invariant violations (empty bank, stage lookup out of range)
    /// are returned as errors; gameplay mistakes are reported through
    /// [`RoundResult::last_message`].
    pub fn play(
        &self,
        session_id: &str,
        submitted: Option<&str>,
    ) -> Result<RoundResult, HangmanError> {
        self.sessions.update(
            session_id,
            || self.new_game_state(),
            |game| {
                game.clear_last_outcome();
                if let Some(input) = submitted {
                    let outcome = game.apply_guess(input);
                    debug!(
                        session_id,
                        %outcome,
                        attempts_remaining = game.attempts_remaining(),
                        "guess applied"
                    );
                    if outcome != GuessOutcome::GameOver && game.is_over() {
                        info!(session_id, won = game.is_won(), "game finished");
                    }
                }
                RoundResult::snapshot(game, &self.bank)
            },
        )
    }

    /// Discard the session's game so the next round deals a fresh word.
    pub fn new_game(&self, session_id: &str) -> bool {
        let existed = self.sessions.remove(session_id).is_some();
        debug!(session_id, existed, "game discarded");
        existed
    }

    fn new_game_state(&self) -> Result<GameState, HangmanError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let word = self.bank.pick_word(&mut *rng)?;
        let prereveal = self.prereveal.count_for(word.chars().count());
        Ok(GameState::create(word, prereveal, &mut *rng))
    }
}

// =========================================================================
// Tests
// =========================================================================
