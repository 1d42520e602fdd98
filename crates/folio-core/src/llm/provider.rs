//! LlmProvider trait definition.
//!
//! This is the core abstraction all text-generation providers implement.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use folio_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for text-generation provider backends (Gemini, OpenAI, etc.).
///
/// Implementations live in `folio-infra` (e.g., `GeminiProvider`). Each
/// implementation makes a single attempt per call, applies its own HTTP
/// client timeout, and translates transport/auth/quota errors into
/// [`LlmError`]. Retries and failover are the pipeline's decision, not the
/// provider's.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini", "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
