use crate::{error::WordError, utils::letters::DEFAULT_WORD_LENGTH, AppState};
use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct WordQuery {
    pub length: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WordResponse {
    pub word: String,
    pub length: usize,
    /// True when the word came from the curated list instead of the generator
    pub fallback: bool,
}

/// Parse the requested length, defaulting to five letters when absent
pub fn requested_length(query: Option<&str>) -> Result<i64, WordError> {
    let params = query
        .map(serde_urlencoded::from_str::<WordQuery>)
        .transpose()
        .map_err(|_| WordError::MalformedLength)?;

    match params.and_then(|p| p.length) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| WordError::MalformedLength),
        _ => Ok(DEFAULT_WORD_LENGTH as i64),
    }
}

/// Serve a random word that was not handed out recently
pub async fn get_word(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<WordResponse>, WordError> {
    let length = requested_length(query.as_deref())?;
    let selected = state.selector.select_word(length).await?;

    tracing::debug!(
        "Serving word of length {} (fallback: {})",
        selected.word.len(),
        selected.used_fallback
    );

    Ok(Json(WordResponse {
        length: selected.word.len(),
        word: selected.word,
        fallback: selected.used_fallback,
    }))
}
