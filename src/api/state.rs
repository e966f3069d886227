use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::AppConfig;
use crate::game::{RoundController, SessionStore, WordBank};

/// Shared application state passed to all handlers via Axum's State extractor.
pub struct AppState {
    pub rounds: RoundController,
    pub config: AppConfig,
    pub start_time: std::time::Instant,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: AppConfig, bank: WordBank) -> SharedState {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let rounds = RoundController::new(
            Arc::new(bank),
            Arc::new(SessionStore::new()),
            rng,
            config.prereveal_policy(),
        );

        Arc::new(AppState {
            rounds,
            config,
            start_time: std::time::Instant::now(),
        })
    }
}
