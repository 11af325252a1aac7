//! Service health endpoint.

use std::time::Instant;

use axum::{http::StatusCode, response::Json};

// Track service start time for uptime reporting
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}

/// GET /health - Basic health check endpoint with version info
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": "marksheet-http",
            "version": env!("CARGO_PKG_VERSION"),
            "uptime_seconds": uptime_seconds(),
            "timestamp": chrono::Utc::now(),
        })),
    )
}
