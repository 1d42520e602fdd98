//! Profile endpoint.
//!
//! GET /api/profile - The full knowledge base as JSON.

use std::time::Instant;

use axum::Json;
use axum::extract::State;

use folio_types::portfolio::KnowledgeContext;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/profile - Full CV data.
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<KnowledgeContext>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let profile = (*state.context).clone();

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(profile, request_id, elapsed)))
}
