use hangman_web::api::router::create_router;
use hangman_web::api::state::AppState;
use hangman_web::config::AppConfig;
use hangman_web::loader::load_word_bank;

#[tokio::main]
async fn main() {
    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hangman_web=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    // A missing or invalid word list is fatal: never serve with a degraded bank.
    let bank = match load_word_bank(&config.words_path, &config.stages_path) {
        Ok(bank) => bank,
        Err(e) => {
            tracing::error!(error = %e, "failed to load word bank");
            std::process::exit(1);
        }
    };

    let bind_addr = config.bind_addr();
    let state = AppState::new(config, bank);
    let app = create_router(state);

    tracing::info!(
        "hangman-web v{} starting on {bind_addr}",
        env!("CARGO_PKG_VERSION")
    );

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %bind_addr, "failed to bind");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
