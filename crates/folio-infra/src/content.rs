//! Static content loader.
//!
//! Parses `{data_dir}/portfolio.toml` into the knowledge base and the blog
//! post list. Unlike `config.toml`, missing or malformed content is a hard
//! startup error: the API has nothing to serve without it.

use std::path::Path;

use serde::Deserialize;

use folio_types::error::ContentError;
use folio_types::portfolio::{BlogPost, KnowledgeContext};

/// Everything `portfolio.toml` holds.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioContent {
    /// The knowledge base injected into prompts and fallback answers.
    pub portfolio: KnowledgeContext,
    /// Static blog posts, served as-is.
    #[serde(default)]
    pub blog: Vec<BlogPost>,
}

/// Load portfolio content from `{data_dir}/portfolio.toml`.
pub async fn load_portfolio(data_dir: &Path) -> Result<PortfolioContent, ContentError> {
    let path = data_dir.join("portfolio.toml");

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ContentError::NotFound(path.display().to_string()));
        }
        Err(err) => return Err(ContentError::Io(err.to_string())),
    };

    toml::from_str(&content).map_err(|err| ContentError::Parse(err.to_string()))
}
