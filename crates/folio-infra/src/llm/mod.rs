//! LLM provider implementations.
//!
//! Contains concrete implementations of the [`LlmProvider`] trait defined in
//! `folio-core`, plus a provider factory ([`create_provider`]) that
//! constructs the right client from a [`ProviderConfig`].
//!
//! [`LlmProvider`]: folio_core::llm::provider::LlmProvider

pub mod gemini;
pub mod openai_compat;

use secrecy::SecretString;

use folio_core::llm::box_provider::BoxLlmProvider;
use folio_types::llm::{LlmError, ProviderConfig, ProviderKind};

use self::gemini::GeminiProvider;
use self::openai_compat::OpenAiCompatibleProvider;

/// Create a [`BoxLlmProvider`] from a [`ProviderConfig`].
///
/// Matches on the provider kind to construct the appropriate concrete
/// client. Both kinds require an API key.
///
/// # Errors
///
/// Returns [`LlmError::AuthenticationFailed`] when no API key is provided.
pub fn create_provider(
    config: &ProviderConfig,
    api_key: Option<&str>,
) -> Result<BoxLlmProvider, LlmError> {
    let key = api_key.ok_or(LlmError::AuthenticationFailed)?;

    match config.kind {
        ProviderKind::Gemini => {
            let secret = SecretString::from(key.to_string());
            let mut provider = GeminiProvider::new(secret, config.model.clone());
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(BoxLlmProvider::new(provider))
        }
        ProviderKind::OpenAiCompatible => {
            let provider = match config.base_url.as_deref() {
                Some(base_url) => OpenAiCompatibleProvider::new(
                    openai_compat::config::OpenAiCompatConfig {
                        provider_name: config.name.clone(),
                        base_url: base_url.to_string(),
                        api_key: key.to_string(),
                        model: config.model.clone(),
                    },
                ),
                None => match config.name.as_str() {
                    "gemini" => OpenAiCompatibleProvider::gemini(key, &config.model),
                    // Default to the OpenAI base URL for unknown names
                    _ => OpenAiCompatibleProvider::openai(key, &config.model),
                },
            };
            Ok(BoxLlmProvider::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gemini_config() -> ProviderConfig {
        ProviderConfig {
            name: "gemini".into(),
            kind: ProviderKind::Gemini,
            model: "gemini-2.5-flash".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            base_url: None,
            priority: 0,
            enabled: true,
        }
    }

    #[test]
    fn create_gemini_provider() {
        let provider = create_provider(&gemini_config(), Some("test-key")).unwrap();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn create_openai_provider_by_name() {
        let config = ProviderConfig {
            name: "openai".into(),
            kind: ProviderKind::OpenAiCompatible,
            model: "gpt-4o-mini".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            base_url: None,
            priority: 1,
            enabled: true,
        };
        let provider = create_provider(&config, Some("sk-test")).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn create_openai_compatible_with_base_url() {
        let config = ProviderConfig {
            name: "local-llm".into(),
            kind: ProviderKind::OpenAiCompatible,
            model: "local-model".into(),
            api_key_env: "LOCAL_LLM_KEY".into(),
            base_url: Some("http://localhost:8080/v1".into()),
            priority: 2,
            enabled: true,
        };
        let provider = create_provider(&config, Some("any")).unwrap();
        assert_eq!(provider.name(), "local-llm");
    }

    #[test]
    fn missing_key_is_auth_error() {
        let result = create_provider(&gemini_config(), None);
        assert!(matches!(result, Err(LlmError::AuthenticationFailed)));
    }
}
