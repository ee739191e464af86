use reqwest::StatusCode;
use tourify_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport or body decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// Local builder state rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
