use axum::Json;
use serde_json::{json, Value};

/// Health check used by the game client
pub async fn api_health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Health check endpoint with build details for operators
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "word-service-backend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_api_health() {
        let Json(body) = api_health().await;
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_health_check_reports_version() {
        let Json(body) = health_check().await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["service"], "word-service-backend");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
