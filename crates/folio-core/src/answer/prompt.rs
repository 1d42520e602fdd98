//! Prompt assembly for provider requests.
//!
//! The system prompt is a fixed instruction template plus a JSON snapshot of
//! the knowledge base. Serialization failures cannot occur for these types
//! (plain structs, no maps with non-string keys), but the code still guards
//! with a readable placeholder rather than panicking.

use folio_types::llm::{CompletionRequest, Message, MessageRole};
use folio_types::portfolio::KnowledgeContext;

/// Build the system prompt injected into every provider request.
pub fn build_system_prompt(ctx: &KnowledgeContext) -> String {
    let name = &ctx.personal.name;

    let section = |label: &str, value: &impl serde::Serialize| {
        let json = serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
        format!("{label}: {json}")
    };

    format!(
        "You are an AI assistant for {name}'s academic portfolio.\n\
         You have access to the following information about {name}:\n\n\
         {personal}\n{education}\n{experience}\n{skills}\n{publications}\n{projects}\n\n\
         Answer questions about {name}'s academic and professional background \
         based on this information. Be professional, concise, and helpful. \
         If you don't have information about something, say so politely.",
        personal = section("Personal", &ctx.personal),
        education = section("Education", &ctx.education),
        experience = section("Experience", &ctx.experience),
        skills = section("Skills", &ctx.skills),
        publications = section("Publications", &ctx.publications),
        projects = section("Projects", &ctx.projects),
    )
}

/// Build a [`CompletionRequest`] for a visitor question.
///
/// The `model` is left empty so each provider in the chain substitutes its
/// own configured model.
pub fn build_completion_request(
    ctx: &KnowledgeContext,
    question: &str,
    max_tokens: u32,
    temperature: f64,
) -> CompletionRequest {
    CompletionRequest {
        model: String::new(),
        messages: vec![Message {
            role: MessageRole::User,
            content: question.to_string(),
        }],
        system: Some(build_system_prompt(ctx)),
        max_tokens,
        temperature: Some(temperature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> KnowledgeContext {
        toml::from_str(
            r#"
skills = ["Rust"]

[personal]
name = "Ada Example"
title = "Researcher"
email = "ada@example.org"
location = "Somewhere"

[[education]]
degree = "PhD, Computing"
institution = "Example University"
year = "2020-2024"
focus = "Distributed systems"
"#,
        )
        .unwrap()
    }

    #[test]
    fn system_prompt_contains_subject_and_sections() {
        let prompt = build_system_prompt(&test_context());
        assert!(prompt.contains("Ada Example's academic portfolio"));
        assert!(prompt.contains("Example University"));
        assert!(prompt.contains("\"Rust\""));
        assert!(prompt.contains("say so politely"));
    }

    #[test]
    fn request_carries_question_and_settings() {
        let request = build_completion_request(&test_context(), "What do you research?", 256, 0.7);
        assert!(request.model.is_empty());
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].content, "What do you research?");
        assert_eq!(request.max_tokens, 256);
        assert!(request.system.as_deref().unwrap().contains("Ada Example"));
    }
}
