use axum::Json;
use jiff::Timestamp;
use serde::Serialize;

/// Health check response body
#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    timestamp: Timestamp,
}

/// Health check handler
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: Timestamp::now(),
    })
}
