pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::library::LibraryService;
use crate::services::sessions::SessionStore;
use crate::services::source::VocabSource;

const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<LibraryService>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(library: LibraryService, sessions: SessionStore) -> Self {
        Self {
            library: Arc::new(library),
            sessions: Arc::new(sessions),
        }
    }
}

/// Build the full router. Also used by the integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Library routes
        .route("/api/library", get(routes::library::status))
        .route("/api/library/reload", post(routes::library::reload))
        // Word routes
        .route("/api/search", get(routes::words::search))
        .route("/api/word-of-the-day", get(routes::words::word_of_the_day))
        // Session routes
        .route("/api/sessions", post(routes::sessions::create))
        .route(
            "/api/sessions/:id",
            get(routes::sessions::get).delete(routes::sessions::delete),
        )
        .route(
            "/api/sessions/:id/selection",
            post(routes::sessions::update_selection),
        )
        // Game routes
        .route(
            "/api/sessions/:id/game",
            post(routes::game::start)
                .get(routes::game::get)
                .delete(routes::game::stop),
        )
        .route("/api/sessions/:id/game/actions", post(routes::game::act))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(source = ?config.source, "Vocabulary source configured");

    let library = LibraryService::new(VocabSource::new(config.source.clone()), &config.manifest_path);

    // A failed load is reported through the API; the server keeps running.
    library.reload().await;

    let state = AppState::new(library, SessionStore::new(config.session_ttl));
    spawn_session_sweeper(state.sessions.clone());

    let app = router(state);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

/// Periodically drop idle sessions that nobody touches again.
fn spawn_session_sweeper(sessions: Arc<SessionStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = sessions.purge_idle(chrono::Utc::now()) {
                tracing::error!(error = %e, "Session sweep failed");
            }
        }
    });
}
