//! HTTP sessions

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;

use crate::error::HttpError;
use crate::options::RequestOptions;
use crate::response::Response;

/// A reusable HTTP client context
///
/// Whoever creates a session owns it and is responsible for closing it.
pub trait Session: Sized + Send + Sync {
    /// Perform one request and read the full response body
    fn execute(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<Response, HttpError>> + Send;

    /// Release the session and any pooled connections
    fn close(self) -> impl Future<Output = ()> + Send;
}

/// reqwest-backed session
///
/// Clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpSession {
    inner: reqwest::Client,
}

impl Default for HttpSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSession {
    /// Create a new session with default settings
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Create a session from a reqwest::Client
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Open a session scoped to a single request
    pub(crate) fn open() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().build()?;
        tracing::debug!("Opened per-request session");
        Ok(Self { inner: client })
    }
}

impl Session for HttpSession {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, HttpError> {
        let request = options.apply(self.inner.request(method, url))?;
        let response = request.send().await?;
        let status = response.status().as_u16();

        // Consuming the response hands the connection back to the pool
        let content = response.bytes().await?;
        tracing::debug!(status, bytes = content.len(), "Read response body");

        Ok(Response::new(status, content.to_vec()))
    }

    async fn close(self) {
        drop(self.inner);
        tracing::debug!("Closed per-request session");
    }
}

/// Session builder for configuring timeouts, headers, proxy and TLS settings
#[derive(Debug, Default)]
pub struct SessionBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    headers: HeaderMap,
    accept_invalid_certs: bool,
    proxy: Option<ProxyConfig>,
    error: Option<HttpError>,
}

#[derive(Debug)]
struct ProxyConfig {
    url: url::Url,
    matcher: Option<regex::Regex>,
}

impl SessionBuilder {
    /// Limit the total time of every request made through the session
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Limit the time spent connecting to the server
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let name = HeaderName::from_bytes(key.as_ref().as_bytes());
        let value = HeaderValue::from_str(value.as_ref());
        match (name, value) {
            (Ok(name), Ok(value)) => {
                self.headers.append(name, value);
            }
            (Err(e), _) => {
                self.error = Some(HttpError::Build(format!("Invalid header name: {}", e)));
            }
            (_, Err(e)) => {
                self.error = Some(HttpError::Build(format!("Invalid header value: {}", e)));
            }
        }
        self
    }

    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Send every request through a proxy
    pub fn proxy(mut self, url: url::Url) -> Self {
        self.proxy = Some(ProxyConfig { url, matcher: None });
        self
    }

    /// Send requests through a proxy only for hosts matching `pattern`
    pub fn proxy_with_matcher(mut self, url: url::Url, pattern: &str) -> Result<Self, HttpError> {
        let matcher = regex::Regex::new(pattern)
            .map_err(|e| HttpError::Proxy(format!("Invalid proxy pattern: {}", e)))?;
        self.proxy = Some(ProxyConfig {
            url,
            matcher: Some(matcher),
        });
        Ok(self)
    }

    /// Build the session
    pub fn build(self) -> Result<HttpSession, HttpError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .default_headers(self.headers);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        if let Some(proxy_config) = self.proxy {
            let proxy_url = proxy_config.url.to_string();
            let proxy = if let Some(matcher) = proxy_config.matcher {
                reqwest::Proxy::custom(move |url| {
                    if matcher.is_match(url.host_str().unwrap_or("")) {
                        Some(proxy_url.clone())
                    } else {
                        None
                    }
                })
            } else {
                reqwest::Proxy::all(&proxy_url).map_err(|e| HttpError::Proxy(e.to_string()))?
            };
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(HttpSession { inner: client })
    }
}
