use std::path::PathBuf;

use crate::game::PrerevealPolicy;

/// Server configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server listen port.
    pub port: u16,
    /// Server bind host.
    pub host: String,
    /// Word list, one word per line.
    pub words_path: PathBuf,
    /// Gallows stage art, blocks separated by empty lines.
    pub stages_path: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Fixed prereveal count; `None` uses the half-word policy.
    pub prereveal: Option<usize>,
    /// Mint a session cookie for callers that have none. When off, such
    /// callers share the default session.
    pub issue_session_cookies: bool,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            port: parsed("PORT").unwrap_or(defaults.port),
            host: std::env::var("HOST").unwrap_or(defaults.host),
            words_path: std::env::var("HANGMAN_WORDS")
                .map(PathBuf::from)
                .unwrap_or(defaults.words_path),
            stages_path: std::env::var("HANGMAN_STAGES")
                .map(PathBuf::from)
                .unwrap_or(defaults.stages_path),
            static_dir: std::env::var("HANGMAN_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed: parsed("HANGMAN_SEED"),
            prereveal: parsed("HANGMAN_PREREVEAL"),
            issue_session_cookies: parsed("HANGMAN_ISSUE_COOKIES")
                .unwrap_or(defaults.issue_session_cookies),
        }
    }

    /// Socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn prereveal_policy(&self) -> PrerevealPolicy {
        self.prereveal
            .map_or(PrerevealPolicy::Half, PrerevealPolicy::Fixed)
    }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: 8080,
            host: "0.0.0.0".to_string(),
            words_path: PathBuf::from("data/words.txt"),
            stages_path: PathBuf::from("data/hangman.txt"),
            static_dir: PathBuf::from("static"),
            seed: None,
            prereveal: None,
            issue_session_cookies: true,
        }
    }
}
