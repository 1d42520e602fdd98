//! Google Gemini provider (native Generative Language API).

pub mod client;
pub mod types;

pub use client::GeminiProvider;
