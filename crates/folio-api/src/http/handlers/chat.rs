//! AI chat endpoint.
//!
//! POST /api/ai-chat
//!
//! Body: `{ "question": "..." }`. A missing or blank question is the only
//! user-visible failure mode (400); everything past validation goes through
//! `AnswerPipeline::resolve`, which always produces text.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The visitor's question. Validated for presence only.
    #[serde(default)]
    pub question: Option<String>,
}

/// POST /api/ai-chat - Answer a visitor question.
pub async fn ai_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let question = body
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("Question is required".to_string()))?;

    let response = state.pipeline.resolve(question).await;

    let elapsed = start.elapsed().as_millis() as u64;
    let data = serde_json::json!({ "response": response });

    Ok(Json(ApiResponse::success(data, request_id, elapsed)))
}
