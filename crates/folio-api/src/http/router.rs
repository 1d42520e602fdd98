//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/`.
//! Middleware: CORS, tracing, gzip compression, request body limit.
//!
//! In production, the built frontend SPA is served from the configured web
//! directory. API routes take priority; unknown paths fall through to the
//! SPA's `index.html` for client-side routing. If the directory does not
//! exist, only the API is served.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Maximum accepted request body size.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(handlers::status::health))
        .route("/profile", get(handlers::profile::get_profile))
        .route("/ai-chat", post(handlers::chat::ai_chat))
        .route("/ai-status", get(handlers::status::ai_status))
        .route("/blog", get(handlers::blog::list_posts))
        .route("/blog/{id}", get(handlers::blog::get_post))
        .route("/dashboard", get(handlers::dashboard::get_dashboard));

    let web_dir = state.web_dir.clone();

    let mut router = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    // Serve the built frontend from disk if the directory exists. API routes
    // take priority; unknown paths fall through to index.html for
    // client-side routing.
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "SPA static file serving enabled");
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::util::ServiceExt;

    use folio_core::answer::AnswerPipeline;
    use folio_core::answer::pipeline::PipelineSettings;
    use folio_types::portfolio::{BlogPost, KnowledgeContext};

    fn test_state() -> AppState {
        let context: Arc<KnowledgeContext> = Arc::new(
            serde_json::from_value(serde_json::json!({
                "personal": {
                    "name": "Ada Example",
                    "title": "Researcher",
                    "email": "ada@example.org",
                    "location": "Italy",
                    "years_of_experience": 5
                },
                "education": [],
                "experience": [],
                "skills": ["Rust", "Python"],
                "publications": [],
                "projects": [],
                "research_areas": ["AI"]
            }))
            .unwrap(),
        );

        let blog = Arc::new(vec![BlogPost {
            id: 1,
            title: "First Post".into(),
            excerpt: "Excerpt".into(),
            content: "Body".into(),
            author: "Ada Example".into(),
            date: "2024-01-15".parse().unwrap(),
            tags: vec!["AI".into()],
        }]);

        // No providers: the pipeline answers from the fallback responder,
        // which keeps these tests offline.
        let pipeline = Arc::new(AnswerPipeline::new(
            Vec::new(),
            context.clone(),
            PipelineSettings::default(),
        ));

        AppState {
            pipeline,
            context,
            blog,
            web_dir: "nonexistent-web-dir".into(),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_fallback_mode() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["ai_available"], false);
        assert!(json["ai_provider"].is_null());
    }

    #[tokio::test]
    async fn ai_status_reports_fallback() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/ai-status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["available"], false);
        assert_eq!(json["fallback"], true);
    }

    #[tokio::test]
    async fn ai_chat_answers_from_fallback() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ai-chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"question": "How can I contact you?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let answer = json["data"]["response"].as_str().unwrap();
        assert!(answer.contains("ada@example.org"));
    }

    #[tokio::test]
    async fn ai_chat_rejects_blank_question() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ai-chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"question": "   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn ai_chat_rejects_missing_question() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ai-chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn blog_list_and_lookup() {
        let router = build_router(test_state());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/blog")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/blog/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["title"], "First Post");
    }

    #[tokio::test]
    async fn unknown_blog_post_is_404() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/blog/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["errors"][0]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn dashboard_counts_static_content() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["blog_posts"], 1);
        assert_eq!(json["data"]["skills"], 2);
        assert_eq!(json["data"]["years_of_experience"], 5);
    }

    #[tokio::test]
    async fn profile_returns_knowledge_context() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["personal"]["name"], "Ada Example");
    }
}
