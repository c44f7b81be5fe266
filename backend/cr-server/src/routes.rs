use crate::{AppState, api, health};

use axum::{
    Router,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::landing::landing::landing))
        // Sign-in
        .route("/auth/telegram/login", get(api::auth::auth::login))
        .route("/auth/telegram/callback", get(api::auth::auth::callback))
        // Dashboard
        .route(
            "/api/v1/dashboard",
            get(api::dashboard::dashboard::get_dashboard)
                .put(api::dashboard::dashboard::save_dashboard),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
