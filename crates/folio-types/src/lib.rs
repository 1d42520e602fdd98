//! Shared domain types for Folio.
//!
//! This crate contains the core domain types used across the Folio backend:
//! the portfolio knowledge base, blog content, LLM request/response shapes,
//! and configuration.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod portfolio;
