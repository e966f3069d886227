use serde::{Deserialize, Serialize};

use crate::game::{GuessOutcome, MAX_ATTEMPTS, RoundResult};

// ---------------------------------------------------------------------------
// Request models
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub letter: String,
}

// ---------------------------------------------------------------------------
// Response models
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime: u64,
    pub active_sessions: usize,
    pub words: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub revealed_word: String,
    pub attempts_remaining: u8,
    pub max_attempts: u8,
    pub won: bool,
    pub lost: bool,
    /// Only sent once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    pub guessed_letters: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GuessOutcome>,
    pub stage: String,
    pub created_at: String,
}

impl From<RoundResult> for GameResponse {
    fn from(round: RoundResult) -> Self {
        let over = round.is_over();
        GameResponse {
            revealed_word: round.revealed_word,
            attempts_remaining: round.attempts_remaining,
            max_attempts: MAX_ATTEMPTS,
            won: round.won,
            lost: round.lost,
            word: over.then_some(round.secret_word),
            guessed_letters: round.guessed_letters,
            message: round.last_message,
            outcome: round.outcome,
            stage: round.stage,
            created_at: round.created_at.to_rfc3339(),
        }
    }
}
