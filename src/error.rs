//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport-level failure (unreachable host, connection reset) or an
    /// unexpected decode failure on a success response. Propagated from
    /// reqwest unmodified.
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend responded with a non-success status. `message` is the
    /// backend's `error` field, or `HTTP error <status>` when the error body
    /// carried no usable message.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl HttpError {
    /// The HTTP status for a backend-reported error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
