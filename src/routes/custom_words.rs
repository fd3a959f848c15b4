use crate::{error::WordError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CustomWordRequest {
    /// Anything other than a string is treated as missing
    #[serde(default)]
    pub word: Value,
}

#[derive(Debug, Serialize)]
pub struct CreatedCustomWord {
    pub id: Uuid,
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct CustomWordResponse {
    pub word: String,
    pub length: usize,
}

/// Save a word a player wants their friends to guess
pub async fn create_custom_word(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomWordRequest>, JsonRejection>,
) -> Result<Json<CreatedCustomWord>, WordError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected custom word body: {}", e);
        WordError::MissingWord
    })?;
    let raw = request.word.as_str().ok_or(WordError::MissingWord)?;

    let saved = state.custom_words.save(raw).await?;

    Ok(Json(CreatedCustomWord {
        id: saved.id,
        word: saved.word,
    }))
}

/// Fetch a previously saved custom word
pub async fn get_custom_word(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CustomWordResponse>, WordError> {
    let custom = state.custom_words.get(&id).await?;

    Ok(Json(CustomWordResponse {
        length: custom.word.len(),
        word: custom.word,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::CustomWord,
        routes::test_support::*,
        words::{CustomWordStore, MemoryRecentWordStore, SourceError, WordSource},
    };
    use async_trait::async_trait;
    use axum::http::StatusCode;

    struct DownSource;

    #[async_trait]
    impl WordSource for DownSource {
        async fn generate(&self, _length: usize) -> Result<String, SourceError> {
            Err(SourceError::RateLimited)
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl CustomWordStore for BrokenStore {
        async fn insert(&self, _word: &str) -> anyhow::Result<CustomWord> {
            anyhow::bail!("pool timed out")
        }

        async fn find(&self, _id: Uuid) -> anyhow::Result<Option<CustomWord>> {
            anyhow::bail!("pool timed out")
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_custom_word() {
        let app = memory_app(Arc::new(DownSource));

        let (status, created) =
            send(&app, post_json("/api/custom-word", r#"{"word": "p*y1thon"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["word"], "PYTHON");

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, get(&format!("/api/custom-word/{}", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["word"], "PYTHON");
        assert_eq!(fetched["length"], 6);
    }

    #[tokio::test]
    async fn test_create_rejects_short_word() {
        let app = memory_app(Arc::new(DownSource));
        let (status, body) = send(&app, post_json("/api/custom-word", r#"{"word": "ab"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Word must be between 4 and 10 letters");
    }

    #[tokio::test]
    async fn test_create_requires_string_word() {
        let app = memory_app(Arc::new(DownSource));
        for body in [r#"{}"#, r#"{"word": 12345}"#, r#"{"word": null}"#, "not json"] {
            let (status, json) = send(&app, post_json("/api/custom-word", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {} should be rejected", body);
            assert_eq!(json["error"], "Word is required");
        }
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_is_404() {
        let app = memory_app(Arc::new(DownSource));
        let uri = format!("/api/custom-word/{}", Uuid::new_v4());
        let (status, body) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Word not found");
    }

    #[tokio::test]
    async fn test_fetch_malformed_id_is_400() {
        let app = memory_app(Arc::new(DownSource));
        let (status, body) = send(&app, get("/api/custom-word/65f1c0ffee")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid word ID"));
    }

    #[tokio::test]
    async fn test_store_outage_is_500() {
        let app = app_with(
            Arc::new(DownSource),
            Arc::new(MemoryRecentWordStore::new()),
            Arc::new(BrokenStore),
        );

        let (status, body) =
            send(&app, post_json("/api/custom-word", r#"{"word": "rust"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Storage unavailable");

        let uri = format!("/api/custom-word/{}", Uuid::new_v4());
        let (status, _) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
