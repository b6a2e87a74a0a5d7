use crate::{
    AppState, dashboard, health, list_records, login, logout, register, submit_health_data,
    trend,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Account endpoints
        .route("/api/v1/register", post(register))
        .route("/api/v1/login", post(login))
        .route("/api/v1/logout", post(logout))
        // Health data endpoints (session required)
        .route("/api/v1/health-data", post(submit_health_data))
        .route("/api/v1/records", get(list_records))
        .route("/api/v1/dashboard", get(dashboard))
        .route("/api/v1/trend", get(trend))
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
