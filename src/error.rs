use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors a client can observe from the word endpoints
#[derive(Debug, Error)]
pub enum WordError {
    #[error("Length must be between 4 and 10 (got {0})")]
    InvalidLength(i64),

    #[error("Length must be a whole number")]
    MalformedLength,

    #[error("Word is required")]
    MissingWord,

    #[error("Word must be between 4 and 10 letters")]
    InvalidWord,

    #[error("Invalid word ID: {0}")]
    InvalidId(String),

    #[error("Word not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Store(anyhow::Error),
}

impl WordError {
    pub fn status(&self) -> StatusCode {
        match self {
            WordError::InvalidLength(_)
            | WordError::MalformedLength
            | WordError::MissingWord
            | WordError::InvalidWord
            | WordError::InvalidId(_) => StatusCode::BAD_REQUEST,
            WordError::NotFound => StatusCode::NOT_FOUND,
            WordError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for WordError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            WordError::Store(err) => {
                // Storage details stay in the logs
                tracing::error!("Storage failure: {:#}", err);
                "Storage unavailable".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
