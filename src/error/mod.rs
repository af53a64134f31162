// Error types for contentful-client
// Author: kelexine (https://github.com/kelexine)

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentfulError {
    #[error("The client url is not set by either the env var CONTENTFUL_URL or the builder method with_url")]
    UrlNotSet,

    #[error("The client token is not set by either the env var CONTENTFUL_TOKEN or the builder method with_token")]
    TokenNotSet,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Contentful API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentfulError {
    /// True for errors raised before any request leaves the process because
    /// the client is missing its url or token.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ContentfulError::UrlNotSet
                | ContentfulError::TokenNotSet
                | ContentfulError::Config(_)
                | ContentfulError::ConfigParsing(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ContentfulError>;
