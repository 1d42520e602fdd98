//! GeminiProvider -- concrete [`LlmProvider`] implementation for the Google
//! Generative Language API.
//!
//! Sends non-streaming requests to `models/{model}:generateContent` with the
//! API key in the `x-goog-api-key` header.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use folio_core::llm::provider::LlmProvider;
use folio_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage,
};

use super::types::{GeminiContent, GeminiRequest, GeminiResponse, GenerationConfig};

/// Google Gemini LLM provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing HTTP request headers. It never appears in Debug output,
/// Display output, or tracing logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Generative Language API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-2.5-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// The default model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full `generateContent` URL for the given model.
    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    /// Convert a generic [`CompletionRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| {
                // Gemini knows "user" and "model" roles.
                let role = match m.role {
                    MessageRole::Assistant => "model",
                    MessageRole::User | MessageRole::System => "user",
                };
                GeminiContent::text(Some(role), m.content.clone())
            })
            .collect();

        GeminiRequest {
            system_instruction: request
                .system
                .as_ref()
                .map(|s| GeminiContent::text(None, s.clone())),
            contents,
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            }),
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug: the SecretString field
// already refuses to print the key, but omitting Debug entirely keeps the
// whole client out of accidental log output.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = if request.model.is_empty() {
            &self.model
        } else {
            &request.model
        };
        let body = self.to_gemini_request(request);
        let url = self.url(model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                400 if error_body.contains("API_KEY_INVALID")
                    || error_body.contains("API key not valid") =>
                {
                    LlmError::AuthenticationFailed
                }
                400 => LlmError::InvalidRequest(error_body),
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                503 => LlmError::Overloaded(error_body),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let candidate = gemini_resp
            .candidates
            .first()
            .ok_or_else(|| LlmError::Deserialization("no candidates in response".to_string()))?;

        let content = candidate
            .content
            .as_ref()
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let usage = gemini_resp
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: gemini_resp.response_id.unwrap_or_default(),
            content,
            model: gemini_resp.model_version.unwrap_or_else(|| model.clone()),
            usage,
        })
    }
}
