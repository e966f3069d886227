//! Hangman served over HTTP.
//!
//! - [`game`]: word bank, per-session game state, session store, rounds.
//! - [`loader`]: word list and stage art files.
//! - [`api`]: Axum routes and JSON models.
//! - [`config`]: environment configuration.

pub mod api;
pub mod config;
pub mod game;
pub mod loader;
