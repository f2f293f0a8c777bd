//! HTTP error types

use thiserror::Error;

/// Errors returned by the request functions
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a status outside of 2xx
    #[error("HTTP error ({status}) requesting {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },
    /// Error raised by the underlying HTTP client, passed through as is
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// Request options could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Proxy error
    #[error("Proxy error: {0}")]
    Proxy(String),
    /// Session build error
    #[error("Session build error: {0}")]
    Build(String),
}

impl HttpError {
    /// Status code carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the underlying client gave up waiting for the server
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Transport(err) if err.is_timeout())
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}
