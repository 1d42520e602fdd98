//! Global configuration types.
//!
//! Deserialized from `config.toml` in the data directory. Every field has a
//! serde default so a missing or partial file still yields a working
//! configuration.

use serde::{Deserialize, Serialize};

use crate::llm::{ProviderConfig, ProviderKind};

/// Global configuration loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Provider chain in declaration order; `priority` decides ordering,
    /// lower values are tried first.
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,

    /// Bound on each provider attempt, enforced by the answer pipeline.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Token cap for generated answers.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature for generated answers.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Directory holding the built frontend, served with an index.html
    /// fallback when it exists.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            request_timeout_secs: default_request_timeout_secs(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            web_dir: default_web_dir(),
        }
    }
}

fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig {
            name: "gemini".into(),
            kind: ProviderKind::Gemini,
            model: "gemini-2.5-flash".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            base_url: None,
            priority: 0,
            enabled: true,
        },
        ProviderConfig {
            name: "openai".into(),
            kind: ProviderKind::OpenAiCompatible,
            model: "gpt-4o-mini".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            base_url: None,
            priority: 1,
            enabled: true,
        },
    ]
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_output_tokens() -> u32 {
    512
}

fn default_temperature() -> f64 {
    0.7
}

fn default_web_dir() -> String {
    "web/dist".into()
}
