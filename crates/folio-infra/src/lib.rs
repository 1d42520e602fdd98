//! Infrastructure implementations for Folio.
//!
//! Concrete [`folio_core::llm::provider::LlmProvider`] clients (Gemini,
//! OpenAI-compatible), the provider factory, environment-based API key
//! resolution, and loaders for `config.toml` and `portfolio.toml`.

pub mod config;
pub mod content;
pub mod llm;
pub mod secret;
