use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContributorsError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<url::ParseError> for ContributorsError {
    fn from(err: url::ParseError) -> Self {
        ContributorsError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContributorsError>;
