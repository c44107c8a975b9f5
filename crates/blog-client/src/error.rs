//! Client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("failed to parse body: {0}")]
    Decode(#[from] serde_json::Error),
}
