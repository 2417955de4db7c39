//! Health check handler

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name reported by the liveness endpoint
pub const SERVICE_NAME: &str = "Weather GUI App";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
}

/// Liveness check - always 200, no dependency checks
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
