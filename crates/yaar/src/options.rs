//! Per-request options passed through to the underlying client

use std::time::Duration;

use serde::Serialize;

use crate::error::HttpError;

/// Options applied to a single request: headers, query, body, timeout and auth
///
/// Encoding failures are remembered and reported when the request is sent, so
/// the builder methods can be chained without intermediate `?`.
#[derive(Debug, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Body>,
    timeout: Option<Duration>,
    auth: Option<Auth>,
    error: Option<HttpError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Json(Vec<u8>),
    Form(String),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Auth {
    Basic {
        username: String,
        password: Option<String>,
    },
    Bearer(String),
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header to the request
    pub fn header(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.headers
            .push((key.as_ref().to_string(), value.as_ref().to_string()));
        self
    }

    /// Append query parameters, encoded from any serializable value
    pub fn query<T: Serialize + ?Sized>(mut self, query: &T) -> Self {
        match serde_urlencoded::to_string(query) {
            Ok(encoded) => self
                .query
                .extend(url::form_urlencoded::parse(encoded.as_bytes()).into_owned()),
            Err(e) => self.error = Some(HttpError::Serialization(e.to_string())),
        }
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.body = Some(Body::Json(bytes)),
            Err(e) => self.error = Some(HttpError::from(e)),
        }
        self
    }

    /// Set the request body as form data
    pub fn form<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_urlencoded::to_string(body) {
            Ok(form_str) => self.body = Some(Body::Form(form_str)),
            Err(e) => self.error = Some(HttpError::Serialization(e.to_string())),
        }
        self
    }

    /// Set a raw request body
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(Body::Bytes(body.into()));
        self
    }

    /// Limit the total time of this request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use HTTP basic authentication
    pub fn basic_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.auth = Some(Auth::Basic {
            username: username.into(),
            password,
        });
        self
    }

    /// Use bearer token authentication
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(Auth::Bearer(token.into()));
        self
    }

    /// Apply the options to a reqwest request, surfacing any deferred encoding error
    pub(crate) fn apply(
        self,
        mut builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, HttpError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        for (key, value) in &self.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }

        builder = match self.body {
            Some(Body::Json(bytes)) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes),
            Some(Body::Form(form_str)) => builder
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(form_str),
            Some(Body::Bytes(bytes)) => builder.body(bytes),
            None => builder,
        };

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match self.auth {
            Some(Auth::Basic { username, password }) => builder.basic_auth(username, password),
            Some(Auth::Bearer(token)) => builder.bearer_auth(token),
            None => builder,
        };

        Ok(builder)
    }
}
