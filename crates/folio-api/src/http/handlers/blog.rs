//! Blog endpoints.
//!
//! - GET /api/blog      - All posts
//! - GET /api/blog/{id} - Single post, 404 when the id is unknown

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};

use folio_types::portfolio::BlogPost;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/blog - All blog posts.
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BlogPost>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let posts = (*state.blog).clone();

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(posts, request_id, elapsed)))
}

/// GET /api/blog/{id} - A single blog post.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<BlogPost>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let post = state
        .blog
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(post, request_id, elapsed)))
}
