//! Provider chain with guaranteed fallback.
//!
//! Routes a visitor question through the configured providers in priority
//! order. Any failure (transport, auth, quota, timeout, empty body) moves
//! the chain to the next provider; when the chain is exhausted -- or empty
//! to begin with -- the deterministic fallback responder answers instead.
//! `resolve` therefore always returns displayable text.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use folio_types::llm::LlmError;
use folio_types::portfolio::KnowledgeContext;

use super::fallback::FallbackResponder;
use super::prompt;
use crate::llm::box_provider::BoxLlmProvider;

/// Tuning knobs for the pipeline, taken from the global config at startup.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Bound on each provider attempt. A provider that has not answered
    /// within this window is treated as failed and the chain moves on.
    pub attempt_timeout: Duration,
    /// Token cap for generated answers.
    pub max_tokens: u32,
    /// Sampling temperature for generated answers.
    pub temperature: f64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            attempt_timeout: Duration::from_secs(30),
            max_tokens: 512,
            temperature: 0.7,
        }
    }
}

/// Snapshot of the pipeline's configuration for health endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStatus {
    /// Whether at least one provider is configured.
    pub provider_configured: bool,
    /// Whether questions are answered by the fallback responder only.
    pub using_fallback: bool,
    /// Names of the configured providers, in priority order.
    pub providers: Vec<String>,
}

/// Routes questions through providers with automatic failover to the
/// keyword responder.
///
/// Providers are tried front to back; the caller supplies them already
/// sorted by priority. The pipeline holds no mutable state, so concurrent
/// `resolve` calls are safe without locking.
pub struct AnswerPipeline {
    providers: Vec<BoxLlmProvider>,
    context: Arc<KnowledgeContext>,
    fallback: FallbackResponder,
    settings: PipelineSettings,
}

impl AnswerPipeline {
    /// Create a pipeline over providers in priority order.
    ///
    /// An empty provider list is valid: the pipeline then operates
    /// permanently in fallback-only mode.
    pub fn new(
        providers: Vec<BoxLlmProvider>,
        context: Arc<KnowledgeContext>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            providers,
            context,
            fallback: FallbackResponder::new(),
            settings,
        }
    }

    /// Answer a question. Never fails.
    ///
    /// Tries each configured provider once, in order, with a bounded wait
    /// per attempt; on exhaustion delegates to the fallback responder.
    pub async fn resolve(&self, question: &str) -> String {
        if self.providers.is_empty() {
            tracing::debug!("no provider configured, answering from fallback responder");
            return self.fallback.answer(question, &self.context);
        }

        let request = prompt::build_completion_request(
            &self.context,
            question,
            self.settings.max_tokens,
            self.settings.temperature,
        );

        for provider in &self.providers {
            let start = Instant::now();
            let attempt =
                tokio::time::timeout(self.settings.attempt_timeout, provider.complete(&request))
                    .await;
            let latency_ms = start.elapsed().as_millis() as u64;

            let error = match attempt {
                Ok(Ok(response)) => {
                    if response.content.trim().is_empty() {
                        // A 2xx with no text is as useless as a transport
                        // error; treat it the same way.
                        LlmError::Deserialization("provider returned empty content".to_string())
                    } else {
                        tracing::info!(
                            provider = provider.name(),
                            latency_ms,
                            input_tokens = response.usage.input_tokens,
                            output_tokens = response.usage.output_tokens,
                            "provider answered"
                        );
                        return response.content;
                    }
                }
                Ok(Err(err)) => err,
                Err(_) => LlmError::Timeout {
                    elapsed_ms: latency_ms,
                },
            };

            tracing::warn!(
                provider = provider.name(),
                error = %error,
                latency_ms,
                "provider attempt failed, trying next in chain"
            );
        }

        tracing::info!("all providers failed, answering from fallback responder");
        self.fallback.answer(question, &self.context)
    }

    /// Configuration snapshot for the status endpoint.
    pub fn status(&self) -> PipelineStatus {
        PipelineStatus {
            provider_configured: !self.providers.is_empty(),
            using_fallback: self.providers.is_empty(),
            providers: self.providers.iter().map(|p| p.name().to_string()).collect(),
        }
    }
}
