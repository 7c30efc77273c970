//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed message returned by the health endpoint.
pub const HEALTH_MESSAGE: &str = "Working / route";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// GET /health — reports that the process is up.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_payload() {
        let Json(body) = check().await;
        assert_eq!(body.message, "Working / route");
    }

    #[test]
    fn test_serializes_single_field() {
        let json = serde_json::to_string(&HealthResponse {
            message: HEALTH_MESSAGE,
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"Working / route"}"#);
    }
}
