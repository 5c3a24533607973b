use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepogradeError {
    #[error("repository URL is required")]
    MissingRepoUrl,

    #[error("invalid GitHub repository URL: {0}")]
    InvalidRepoUrl(String),

    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("GitHub API rate limit exceeded, try again later")]
    RateLimited,

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GitHub request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("readme content is not valid base64: {0}")]
    ReadmeDecode(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, RepogradeError>;
