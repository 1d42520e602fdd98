//! Application state wiring.
//!
//! `AppState` holds everything the request path reads: the answer pipeline,
//! the knowledge base, and the blog content. All of it is built once in
//! `init` and shared behind `Arc`s; nothing is mutated afterwards.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use secrecy::ExposeSecret;

use folio_core::answer::pipeline::PipelineSettings;
use folio_core::answer::AnswerPipeline;
use folio_infra::config::load_global_config;
use folio_infra::content::load_portfolio;
use folio_infra::llm::create_provider;
use folio_infra::secret::resolve_api_key;
use folio_types::portfolio::{BlogPost, KnowledgeContext};

/// Shared application state for the REST API.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnswerPipeline>,
    pub context: Arc<KnowledgeContext>,
    pub blog: Arc<Vec<BlogPost>>,
    pub web_dir: String,
}

impl AppState {
    /// Initialize the application state: load config and content, resolve
    /// provider API keys from the environment, build the answer pipeline.
    ///
    /// A provider whose key is absent is skipped with a log line; no
    /// providers at all means the pipeline runs in fallback-only mode.
    pub async fn init(data_dir: &Path) -> anyhow::Result<Self> {
        let config = load_global_config(data_dir).await;

        let content = load_portfolio(data_dir)
            .await
            .with_context(|| format!("loading portfolio content from {}", data_dir.display()))?;

        let context = Arc::new(content.portfolio);
        let blog = Arc::new(content.blog);

        // Sort by priority (stable, so declaration order breaks ties)
        let mut provider_configs: Vec<_> =
            config.providers.iter().filter(|p| p.enabled).collect();
        provider_configs.sort_by_key(|p| p.priority);

        let mut providers = Vec::new();
        for provider_config in provider_configs {
            let Some(key) = resolve_api_key(&provider_config.api_key_env) else {
                tracing::info!(
                    provider = %provider_config.name,
                    env = %provider_config.api_key_env,
                    "API key not set, provider skipped"
                );
                continue;
            };

            match create_provider(provider_config, Some(key.expose_secret())) {
                Ok(provider) => {
                    tracing::info!(
                        provider = %provider_config.name,
                        model = %provider_config.model,
                        "provider configured"
                    );
                    providers.push(provider);
                }
                Err(err) => {
                    tracing::warn!(
                        provider = %provider_config.name,
                        error = %err,
                        "failed to construct provider, skipped"
                    );
                }
            }
        }

        if providers.is_empty() {
            tracing::info!("no AI provider configured, using fallback responses");
        }

        let settings = PipelineSettings {
            attempt_timeout: Duration::from_secs(config.request_timeout_secs),
            max_tokens: config.max_output_tokens,
            temperature: config.temperature,
        };

        let pipeline = Arc::new(AnswerPipeline::new(providers, context.clone(), settings));

        Ok(Self {
            pipeline,
            context,
            blog,
            web_dir: config.web_dir,
        })
    }
}
