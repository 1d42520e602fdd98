//! Answer pipeline and provider abstractions for Folio.
//!
//! This crate defines the `LlmProvider` trait (the "port" that concrete
//! provider clients in `folio-infra` implement) and the answer pipeline
//! built on top of it. It depends only on `folio-types` -- never on
//! `folio-infra` or any HTTP client crate.

pub mod answer;
pub mod llm;
