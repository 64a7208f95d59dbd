use thiserror::Error;

pub type Result<T> = std::result::Result<T, TwitterError>;

#[derive(Debug, Error)]
pub enum TwitterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Twitter API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("OAuth signing failed: {0}")]
    OAuth(String),

    /// The call needs credentials that were not supplied in `TwitterOptions`.
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
