//! Dashboard analytics endpoint.
//!
//! GET /api/dashboard - Aggregate counts over the static content.

use std::time::Instant;

use axum::Json;
use axum::extract::State;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/dashboard - Aggregate portfolio statistics.
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let ctx = &state.context;
    let data = serde_json::json!({
        "total_publications": ctx.publications.len(),
        "total_projects": ctx.projects.len(),
        "years_of_experience": ctx.personal.years_of_experience,
        "blog_posts": state.blog.len(),
        "skills": ctx.skills.len(),
        "research_areas": ctx.research_areas,
    });

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(data, request_id, elapsed)))
}
