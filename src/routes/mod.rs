pub mod custom_words;
pub mod health;
pub mod words;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::api_health))
        .route("/word", get(words::get_word))
        .route("/custom-word", post(custom_words::create_custom_word))
        .route("/custom-word/{id}", get(custom_words::get_custom_word))
}
