mod config;
mod routes;
mod websocket;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use axum::{routing::get, Router};
use config::{Config, GameConfig};
use dashmap::DashMap;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use word_scramble::{GameError, GameSession, StartWords, WordList, WordValidator};

/// Session type served over the WebSocket; all sessions share one dictionary
pub type SharedSession = GameSession<Arc<WordList>>;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<WordList>,
    pub start_words: StartWords,
    /// One isolated game per WebSocket connection
    pub sessions: DashMap<Uuid, SharedSession>,
}

impl AppState {
    pub fn new_session(&self) -> Result<SharedSession, GameError> {
        let validator =
            WordValidator::with_language(self.dictionary.clone(), &self.config.game.language);
        GameSession::with_fallback(validator, self.config.game.fallback_root_word.as_deref())
    }
}

/// Load the start word list. Without usable start words the fallback root
/// word is mandatory, otherwise no round could ever start.
async fn load_start_words(game: &GameConfig) -> Result<StartWords> {
    let start_words = match StartWords::load(&game.start_words_path).await {
        Ok(words) => words,
        Err(e) => match &game.fallback_root_word {
            Some(fallback) => {
                tracing::warn!("{}. Every round will use '{}'.", e, fallback);
                StartWords::default()
            }
            None => bail!("{}. Set START_WORDS_PATH or ROOT_WORD_FALLBACK.", e),
        },
    };

    ensure_root_word_available(&start_words, game)?;
    Ok(start_words)
}

fn ensure_root_word_available(start_words: &StartWords, game: &GameConfig) -> Result<()> {
    if start_words.is_empty() && game.fallback_root_word.is_none() {
        bail!(
            "No usable start words in {} and ROOT_WORD_FALLBACK is disabled",
            game.start_words_path
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "word_scramble=debug,word_scramble_server=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Scramble server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match WordList::load(&config.game.dictionary_path, &config.game.language)
        .await
    {
        Ok(dict) => dict,
        Err(e) => {
            tracing::warn!("{}. Using empty dictionary for now.", e);
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            WordList::empty(&config.game.language)
        }
    };

    let start_words = load_start_words(&config.game).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        dictionary: Arc::new(dictionary),
        start_words,
        sessions: DashMap::new(),
    });

    // Reject a bad fallback before accepting connections
    state
        .new_session()
        .context("ROOT_WORD_FALLBACK is not a usable root word")?;

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
