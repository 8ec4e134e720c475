//! Error types for the SDK.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level failure (connect, timeout, body read, decode).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status. Carries the response
    /// body for diagnostics. Emitted either immediately (non-transient
    /// statuses) or after the retry budget is exhausted.
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },
}

impl ClientError {
    /// Status code of an API error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(_) => None,
        }
    }
}
