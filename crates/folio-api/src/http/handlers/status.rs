//! Health and AI status endpoints.
//!
//! - GET /api/health    - Liveness plus provider availability
//! - GET /api/ai-status - Provider/fallback configuration snapshot

use axum::Json;
use axum::extract::State;

use crate::state::AppState;

/// GET /api/health - Simple health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let status = state.pipeline.status();

    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "ai_provider": status.providers.first().cloned(),
        "ai_available": status.provider_configured,
    }))
}

/// GET /api/ai-status - Provider configuration for observability.
pub async fn ai_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let status = state.pipeline.status();

    Json(serde_json::json!({
        "provider": status.providers.first().cloned(),
        "providers": status.providers,
        "available": status.provider_configured,
        "fallback": status.using_fallback,
    }))
}
