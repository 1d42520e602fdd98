//! Question answering.
//!
//! - `AnswerPipeline`: routes a question through the configured providers
//!   and guarantees a displayable answer
//! - `FallbackResponder`: deterministic keyword-matched answers
//! - `prompt`: assembles the provider prompt from the knowledge base

pub mod fallback;
pub mod pipeline;
pub mod prompt;

pub use fallback::FallbackResponder;
pub use pipeline::{AnswerPipeline, PipelineStatus};
