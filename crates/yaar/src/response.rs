//! HTTP response types

use std::borrow::Cow;
use std::str::Utf8Error;

use serde::de::DeserializeOwned;

/// A completed HTTP response: the status code and the full body
///
/// The body is kept as bytes. Decoding to text or JSON happens only when asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    content: Vec<u8>,
}

impl Response {
    /// Create a response from a status code and a body
    pub fn new(status: u16, content: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content: content.into(),
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the raw response body
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Take ownership of the raw response body
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Get the response body decoded as UTF-8
    pub fn text(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.content)
    }

    /// Get the response body decoded as UTF-8, replacing invalid sequences
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// Parse the response body as JSON
    ///
    /// Use `serde_json::Value` as `T` when the shape is not known up front.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.content)
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}
