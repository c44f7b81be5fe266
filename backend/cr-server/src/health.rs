use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - Component status, including a store round trip
pub async fn health(State(state): State<AppState>) -> Response {
    let store_status = match state.store.health_check().await {
        Ok(()) => "operational",
        Err(e) => {
            warn!("Health check: store unreachable: {}", e);
            "unavailable"
        }
    };

    let health = json!({
        "status": if store_status == "operational" { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": store_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe; not ready while the store is unreachable
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.store.health_check().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Store unavailable").into_response()
        }
    }
}
