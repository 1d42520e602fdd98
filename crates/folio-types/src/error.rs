use thiserror::Error;

/// Errors from loading static content (portfolio, blog).
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),

    #[error("failed to parse content: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_error_display() {
        let err = ContentError::NotFound("data/portfolio.toml".into());
        assert!(err.to_string().contains("data/portfolio.toml"));

        let err = ContentError::Parse("expected table".into());
        assert!(err.to_string().contains("expected table"));
    }
}
