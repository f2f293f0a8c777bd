//! Shorthand async HTTP requests
//!
//! Each function issues a single request through [reqwest] and returns a [`Response`]
//! holding the status code and the full body. Statuses outside of 2xx are turned into
//! [`HttpError::Status`].
//!
//! Pass `None` as the session to have one opened and closed for that call only, or pass
//! a [`HttpSession`] to reuse its connection pool. A supplied session is never closed.
//!
//! # Example
//!
//! ```no_run
//! use serde::Deserialize;
//! use yaar::{HttpError, HttpSession, RequestOptions};
//!
//! #[derive(Deserialize)]
//! struct ApiResponse {
//!     message: String,
//! }
//!
//! async fn example() -> Result<String, HttpError> {
//!     let response = yaar::get("https://api.example.com/data", None, RequestOptions::default()).await?;
//!     let body: ApiResponse = response.json()?;
//!
//!     let session = HttpSession::new();
//!     let options = RequestOptions::new()
//!         .header("x-request-id", "42")
//!         .json(&serde_json::json!({"message": body.message}));
//!     let response = yaar::post("https://api.example.com/echo", Some(&session), options).await?;
//!
//!     Ok(response.text_lossy().into_owned())
//! }
//! ```

mod error;
mod options;
mod request;
mod response;
mod session;

pub use error::HttpError;
pub use options::RequestOptions;
pub use request::{
    connect, delete, get, head, options, patch, post, put, request, request_with, trace,
};
pub use reqwest::Method;
pub use response::Response;
pub use session::{HttpSession, Session, SessionBuilder};
