mod config;
mod db;
mod dictionary;
mod error;
mod models;
mod routes;
mod utils;
mod words;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::Router;
use config::{Config, StoreBackend};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use words::{
    CustomWordStore, CustomWords, GeminiWordSource, MemoryCustomWordStore, MemoryRecentWordStore,
    PgCustomWordStore, PgRecentWordStore, RecentWordStore, WordSelector,
};

/// Application state shared across all handlers
pub struct AppState {
    pub selector: WordSelector,
    pub custom_words: CustomWords,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_service_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word service backend...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let (recent_store, custom_store) = open_stores(&config).await?;

    // Shared HTTP client for the word source
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    if config.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, every word will come from the fallback list");
    }
    let source = Arc::new(GeminiWordSource::new(config.gemini.clone(), http_client));

    let selector = WordSelector::new(source, recent_store, config.selection_policy());
    tracing::info!("Word selection policy: {:?}", selector.policy());

    let state = Arc::new(AppState {
        selector,
        custom_words: CustomWords::new(custom_store),
    });

    let app = build_router(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Connect the configured word stores
async fn open_stores(
    config: &Config,
) -> Result<(Arc<dyn RecentWordStore>, Arc<dyn CustomWordStore>)> {
    match config.words.store {
        StoreBackend::Postgres => {
            let db =
                db::create_pool(config.database_url()?, config.database.max_connections).await?;
            Ok((
                Arc::new(PgRecentWordStore::new(db.clone())),
                Arc::new(PgCustomWordStore::new(db)),
            ))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory word stores, nothing survives a restart");
            Ok((
                Arc::new(MemoryRecentWordStore::new()),
                Arc::new(MemoryCustomWordStore::new()),
            ))
        }
    }
}

fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
