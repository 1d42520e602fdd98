//! Portfolio knowledge base types.
//!
//! [`KnowledgeContext`] is the read-only aggregate describing the portfolio
//! subject: personal details, education, experience, skills, publications,
//! and projects. It is deserialized once at process start and shared
//! read-only across requests -- nothing in the request path mutates it.
//!
//! [`BlogPost`] models the static blog content served alongside the CV.

use serde::{Deserialize, Serialize};

/// Personal details of the portfolio subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Summed professional experience, surfaced on the dashboard.
    #[serde(default)]
    pub years_of_experience: u32,
}

/// A single degree or ongoing program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub focus: String,
}

/// A single position held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// A published paper or article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub journal: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

/// A project with its technology stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// The full knowledge base injected into provider prompts and used by the
/// fallback responder.
///
/// Invariant: constructed once at startup, never mutated afterwards. All
/// consumers hold it behind `Arc` and read concurrently without locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeContext {
    pub personal: Personal,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub research_areas: Vec<String>,
}

/// A static blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    /// Publication date, ISO `YYYY-MM-DD`.
    pub date: chrono::NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toml() -> &'static str {
        r#"
skills = ["Rust", "Databases"]
research_areas = ["Systems"]

[personal]
name = "Ada Example"
title = "Researcher"
email = "ada@example.org"
location = "Somewhere"
years_of_experience = 4

[[education]]
degree = "PhD, Computing"
institution = "Example University"
year = "2020-2024"
focus = "Distributed systems"
"#
    }

    #[test]
    fn knowledge_context_from_toml() {
        let ctx: KnowledgeContext = toml::from_str(sample_toml()).unwrap();
        assert_eq!(ctx.personal.name, "Ada Example");
        assert_eq!(ctx.personal.years_of_experience, 4);
        assert_eq!(ctx.education.len(), 1);
        assert_eq!(ctx.education[0].institution, "Example University");
        assert_eq!(ctx.skills, vec!["Rust", "Databases"]);
        // Sections absent from the file default to empty
        assert!(ctx.publications.is_empty());
        assert!(ctx.projects.is_empty());
    }

    #[test]
    fn optional_personal_fields_are_skipped_in_json() {
        let ctx: KnowledgeContext = toml::from_str(sample_toml()).unwrap();
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(!json.contains("phone"));
        assert!(!json.contains("linkedin"));
        assert!(json.contains("ada@example.org"));
    }

    #[test]
    fn blog_post_roundtrip() {
        let post = BlogPost {
            id: 1,
            title: "Title".into(),
            excerpt: "Excerpt".into(),
            content: "Body".into(),
            author: "Ada Example".into(),
            date: "2024-01-15".parse().unwrap(),
            tags: vec!["AI".into()],
        };
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"2024-01-15\""));
        let parsed: BlogPost = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, 1);
        assert_eq!(parsed.tags, vec!["AI"]);
    }
}
