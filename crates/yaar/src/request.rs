//! Request dispatch and the per-method shorthands

use reqwest::Method;
use tracing::instrument;

use crate::error::HttpError;
use crate::options::RequestOptions;
use crate::response::Response;
use crate::session::{HttpSession, Session};

/// Perform one request with an arbitrary method
///
/// When `session` is `None` a session is opened for this call only and closed
/// before returning, whatever the outcome. A supplied session is left open.
///
/// # Errors
///
/// Returns [`HttpError::Status`] when the server answers with a status outside
/// of 2xx, and [`HttpError::Transport`] when the request itself fails.
#[instrument(skip_all, fields(%method, %url))]
pub async fn request(
    method: Method,
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    dispatch(method, url, session, HttpSession::open, options).await
}

/// Perform one request through any caller-owned [`Session`]
///
/// The session is reused as is and never closed.
pub async fn request_with<S: Session>(
    method: Method,
    url: &str,
    session: &S,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    send(session, method, url, options).await
}

pub(crate) async fn dispatch<S, F>(
    method: Method,
    url: &str,
    session: Option<&S>,
    open: F,
    options: RequestOptions,
) -> Result<Response, HttpError>
where
    S: Session,
    F: FnOnce() -> Result<S, HttpError>,
{
    match session {
        Some(session) => send(session, method, url, options).await,
        None => {
            let session = open()?;
            let outcome = send(&session, method, url, options).await;
            session.close().await;
            outcome
        }
    }
}

async fn send<S: Session>(
    session: &S,
    method: Method,
    url: &str,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    let response = session.execute(method, url, options).await?;

    if !response.is_success() {
        tracing::warn!(status = response.status(), "Request rejected by server");
        return Err(HttpError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    Ok(response)
}

/// GET request
pub async fn get(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::GET, url, session, options).await
}

/// POST request
pub async fn post(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::POST, url, session, options).await
}

/// PUT request
pub async fn put(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::PUT, url, session, options).await
}

/// DELETE request
pub async fn delete(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::DELETE, url, session, options).await
}

/// PATCH request
pub async fn patch(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::PATCH, url, session, options).await
}

/// OPTIONS request
pub async fn options(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::OPTIONS, url, session, options).await
}

/// HEAD request, the returned body is always empty
pub async fn head(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::HEAD, url, session, options).await
}

/// CONNECT request
pub async fn connect(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::CONNECT, url, session, options).await
}

/// TRACE request
pub async fn trace(
    url: &str,
    session: Option<&HttpSession>,
    options: RequestOptions,
) -> Result<Response, HttpError> {
    request(Method::TRACE, url, session, options).await
}
