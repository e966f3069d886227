use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};

use super::errors::ApiError;
use super::models::*;
use super::session::PlayerSession;
use super::state::SharedState;

// =========================================================================
// Health
// =========================================================================

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime,
        active_sessions: state.rounds.sessions().len(),
        words: state.rounds.bank().len(),
    })
}

// =========================================================================
// Rounds
// =========================================================================

/// GET /api/game
pub async fn get_game(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    play_round(&state, &headers, None)
}

/// POST /api/game/guess
pub async fn guess(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(input): Json<GuessRequest>,
) -> Result<Response, ApiError> {
    play_round(&state, &headers, Some(input.letter.as_str()))
}

/// DELETE /api/game
pub async fn new_game(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let session = PlayerSession::resolve(&headers, state.config.issue_session_cookies);
    state.rounds.new_game(&session.id);
    respond(&state, &session, None)
}

fn play_round(
    state: &SharedState,
    headers: &HeaderMap,
    submitted: Option<&str>,
) -> Result<Response, ApiError> {
    let session = PlayerSession::resolve(headers, state.config.issue_session_cookies);
    respond(state, &session, submitted)
}

fn respond(
    state: &SharedState,
    session: &PlayerSession,
    submitted: Option<&str>,
) -> Result<Response, ApiError> {
    let round = state.rounds.play(&session.id, submitted)?;
    session.attach(Json(GameResponse::from(round)).into_response())
}

// =========================================================================
// Tests
// =========================================================================
