//! Deterministic keyword-matched fallback responder.
//!
//! Used when no provider is configured or every configured provider fails.
//! Matching is a case-insensitive substring search over a fixed, ordered
//! rule list; the first matching rule wins. The order is a contract:
//!
//! 1. research / focus
//! 2. education / degree
//! 3. skill / expertise
//! 4. contact / email
//! 5. publication / paper
//! 6. project
//! 7. generic pointer (no match)
//!
//! A question matching several rules resolves to the earliest one. Answers
//! are templated from the [`KnowledgeContext`] so they track content changes.

use folio_types::portfolio::KnowledgeContext;

/// Stateless responder producing a canned answer for any question.
#[derive(Debug, Clone, Default)]
pub struct FallbackResponder;

impl FallbackResponder {
    pub fn new() -> Self {
        Self
    }

    /// Answer a question from the knowledge base alone.
    ///
    /// Pure and total: identical inputs yield identical output, and the
    /// result is never empty.
    pub fn answer(&self, question: &str, ctx: &KnowledgeContext) -> String {
        let q = question.to_lowercase();

        // First match wins; do not reorder.
        if contains_any(&q, &["research", "focus"]) {
            return research_answer(ctx);
        }
        if contains_any(&q, &["education", "degree"]) {
            return education_answer(ctx);
        }
        if contains_any(&q, &["skill", "expertise"]) {
            return skills_answer(ctx);
        }
        if contains_any(&q, &["contact", "email"]) {
            return contact_answer(ctx);
        }
        if contains_any(&q, &["publication", "paper"]) {
            return publications_answer(ctx);
        }
        if q.contains("project") {
            return projects_answer(ctx);
        }

        generic_answer(ctx)
    }
}

fn contains_any(question: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| question.contains(k))
}

fn research_answer(ctx: &KnowledgeContext) -> String {
    let name = &ctx.personal.name;

    let areas = if ctx.research_areas.is_empty() {
        ctx.personal.title.clone()
    } else {
        ctx.research_areas.join(", ")
    };

    let mut answer = format!("{name}'s research focuses on {areas}.");

    if let Some(entry) = ctx.education.iter().find(|e| e.degree.contains("PhD")) {
        answer.push_str(&format!(
            " {name} is currently pursuing a {} at {} ({}), focused on {}.",
            entry.degree, entry.institution, entry.year, entry.focus
        ));
    }

    answer
}

fn education_answer(ctx: &KnowledgeContext) -> String {
    let name = &ctx.personal.name;

    if ctx.education.is_empty() {
        return format!(
            "{name} has not listed formal education entries. You can reach out at {} for details.",
            ctx.personal.email
        );
    }

    let entries = ctx
        .education
        .iter()
        .map(|e| format!("{} at {} ({})", e.degree, e.institution, e.year))
        .collect::<Vec<_>>()
        .join("; ");

    format!("{name}'s education: {entries}.")
}

fn skills_answer(ctx: &KnowledgeContext) -> String {
    let name = &ctx.personal.name;

    if ctx.skills.is_empty() {
        return format!("{name} works as {}.", ctx.personal.title);
    }

    format!(
        "{name}'s technical skills include {}.",
        ctx.skills.join(", ")
    )
}

fn contact_answer(ctx: &KnowledgeContext) -> String {
    let name = &ctx.personal.name;
    let mut answer = format!("You can contact {name} at {}", ctx.personal.email);

    if let Some(linkedin) = &ctx.personal.linkedin {
        answer.push_str(&format!(" or through LinkedIn at {linkedin}"));
    }
    answer.push('.');
    answer.push_str(&format!(
        " {name} is based in {} and open to collaborations.",
        ctx.personal.location
    ));

    answer
}

fn publications_answer(ctx: &KnowledgeContext) -> String {
    let name = &ctx.personal.name;

    if ctx.publications.is_empty() {
        return format!(
            "{name} has not listed publications yet. Ask about research focus or projects instead."
        );
    }

    let entries = ctx
        .publications
        .iter()
        .map(|p| format!("\"{}\" in {} ({})", p.title, p.journal, p.year))
        .collect::<Vec<_>>()
        .join("; ");

    format!("{name}'s publications include {entries}.")
}

fn projects_answer(ctx: &KnowledgeContext) -> String {
    let name = &ctx.personal.name;

    if ctx.projects.is_empty() {
        return format!("{name} has not listed projects yet.");
    }

    let entries = ctx
        .projects
        .iter()
        .map(|p| {
            if p.technologies.is_empty() {
                format!("{}: {}", p.name, p.description)
            } else {
                format!("{}: {} (built with {})", p.name, p.description, p.technologies.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    format!("{name} has worked on {entries}.")
}

fn generic_answer(ctx: &KnowledgeContext) -> String {
    format!(
        "I'm having trouble answering that right now. Try asking about {name}'s \
         research focus, education, skills, publications, or projects -- or reach \
         out directly at {email}.",
        name = ctx.personal.name,
        email = ctx.personal.email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> KnowledgeContext {
        toml::from_str(
            r#"
skills = ["Machine Learning", "Python", "Rust"]
research_areas = ["AI", "Healthcare"]

[personal]
name = "Ada Example"
title = "AI Researcher"
email = "ada@example.org"
location = "Italy"
linkedin = "linkedin.com/in/ada-example"

[[education]]
degree = "PhD, Artificial Intelligence in Medicine"
institution = "University of Brescia"
year = "2022-2025"
focus = "Medical imaging"

[[education]]
degree = "MSc, Communication Technologies"
institution = "University of Brescia"
year = "2019-2022"
focus = "Computer vision"

[[publications]]
title = "Advanced AI Applications in Healthcare"
journal = "AI Research Journal"
year = "2024"

[[projects]]
name = "Disease Predictor"
description = "ML models for disease prediction"
technologies = ["Python", "TensorFlow"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn research_rule_wins_over_skill_and_project() {
        // Contains "research", "skill", and "project" keywords; the research
        // rule is first in the order and must win.
        let responder = FallbackResponder::new();
        let answer = responder.answer(
            "What are your research skills and projects?",
            &test_context(),
        );
        assert!(answer.contains("research focuses on"));
        assert!(!answer.contains("technical skills include"));
    }

    #[test]
    fn education_rule_before_skill() {
        let responder = FallbackResponder::new();
        let answer = responder.answer("What degree and skills do you have?", &test_context());
        assert!(answer.contains("education"));
        assert!(answer.contains("University of Brescia"));
    }

    #[test]
    fn skills_answer_lists_skills() {
        let responder = FallbackResponder::new();
        let answer = responder.answer("Tell me about your expertise", &test_context());
        assert!(answer.contains("Machine Learning"));
        assert!(answer.contains("Rust"));
    }

    #[test]
    fn contact_answer_contains_email() {
        let responder = FallbackResponder::new();
        let answer = responder.answer("How can I contact you?", &test_context());
        assert!(answer.contains("ada@example.org"));
        assert!(answer.contains("linkedin.com/in/ada-example"));
    }

    #[test]
    fn publication_answer_lists_titles() {
        let responder = FallbackResponder::new();
        let answer = responder.answer("Any recent papers?", &test_context());
        assert!(answer.contains("Advanced AI Applications in Healthcare"));
        assert!(answer.contains("AI Research Journal"));
    }

    #[test]
    fn project_answer_lists_technologies() {
        let responder = FallbackResponder::new();
        let answer = responder.answer("What projects have you built?", &test_context());
        assert!(answer.contains("Disease Predictor"));
        assert!(answer.contains("TensorFlow"));
    }

    #[test]
    fn gibberish_gets_generic_answer_with_email() {
        let responder = FallbackResponder::new();
        let answer = responder.answer("xyz unrelated gibberish", &test_context());
        assert!(answer.contains("ada@example.org"));
        assert!(answer.contains("research focus"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let responder = FallbackResponder::new();
        let lower = responder.answer("what is your research about", &test_context());
        let upper = responder.answer("WHAT IS YOUR RESEARCH ABOUT", &test_context());
        assert_eq!(lower, upper);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let responder = FallbackResponder::new();
        let ctx = test_context();
        let first = responder.answer("Tell me about your projects", &ctx);
        let second = responder.answer("Tell me about your projects", &ctx);
        assert_eq!(first, second);
    }

    #[test]
    fn every_rule_yields_non_empty_answer() {
        let responder = FallbackResponder::new();
        let ctx = test_context();
        for q in [
            "research", "education", "skill", "contact", "publication", "project", "???",
        ] {
            assert!(!responder.answer(q, &ctx).is_empty(), "empty answer for '{q}'");
        }
    }

    #[test]
    fn answers_track_context_changes() {
        let responder = FallbackResponder::new();
        let mut ctx = test_context();
        ctx.personal.email = "new@example.org".into();
        let answer = responder.answer("How can I contact you?", &ctx);
        assert!(answer.contains("new@example.org"));
        assert!(!answer.contains("ada@example.org"));
    }
}
