//! HTTP-specific error types for the r/place client.
//!
//! This module contains the status-code taxonomy ([`ErrorKind`]), the error
//! carrying a classified response, retry exhaustion, and request validation
//! failures.
//!
//! # Error Handling
//!
//! - [`ErrorKind`]: Semantic kind of a non-2xx status code
//! - [`HttpResponseError`]: A non-2xx response, classified
//! - [`MaxHttpRetriesExceededError`]: Transport failures persisted past the retry budget
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use reddit_place::clients::{ErrorKind, HttpError};
//!
//! match http_client.request(&request).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(HttpError::Response(e)) if e.kind == ErrorKind::TooManyRequests => {
//!         println!("Slow down: {}", e);
//!     }
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} tries", e.tries),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// Semantic kind of an unsuccessful HTTP status code.
///
/// Twelve status codes have a dedicated kind; every other non-2xx code maps
/// to [`ErrorKind::Http`].
///
/// # Example
///
/// ```rust
/// use reddit_place::clients::ErrorKind;
///
/// assert_eq!(ErrorKind::classify(204), None);
/// assert_eq!(ErrorKind::classify(403), Some(ErrorKind::Forbidden));
/// assert_eq!(ErrorKind::classify(418), Some(ErrorKind::Http));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 Bad Request.
    BadRequest,
    /// 401 Unauthorized.
    Authorization,
    /// 403 Forbidden.
    Forbidden,
    /// 404 Not Found.
    NotFound,
    /// 409 Conflict.
    Conflict,
    /// 422 Unprocessable Entity.
    UnprocessableEntity,
    /// 429 Too Many Requests.
    TooManyRequests,
    /// 500 Internal Server Error.
    Server,
    /// 501 Not Implemented.
    NotImplemented,
    /// 502 Bad Gateway.
    BadGateway,
    /// 503 Service Unavailable.
    ServiceUnavailable,
    /// 504 Gateway Timeout.
    GatewayTimeout,
    /// Any other non-2xx status code.
    Http,
}

impl ErrorKind {
    /// Classifies a status code.
    ///
    /// Returns `None` for codes in `200..=299`.
    #[must_use]
    pub const fn classify(status: u16) -> Option<Self> {
        let kind = match status {
            200..=299 => return None,
            400 => Self::BadRequest,
            401 => Self::Authorization,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            500 => Self::Server,
            501 => Self::NotImplemented,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            _ => Self::Http,
        };
        Some(kind)
    }

    /// Returns the status code this kind is dedicated to.
    ///
    /// The generic [`ErrorKind::Http`] kind has no dedicated code.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::Authorization => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Conflict => Some(409),
            Self::UnprocessableEntity => Some(422),
            Self::TooManyRequests => Some(429),
            Self::Server => Some(500),
            Self::NotImplemented => Some(501),
            Self::BadGateway => Some(502),
            Self::ServiceUnavailable => Some(503),
            Self::GatewayTimeout => Some(504),
            Self::Http => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "bad request",
            Self::Authorization => "authorization",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
            Self::UnprocessableEntity => "unprocessable entity",
            Self::TooManyRequests => "too many requests",
            Self::Server => "server error",
            Self::NotImplemented => "not implemented",
            Self::BadGateway => "bad gateway",
            Self::ServiceUnavailable => "service unavailable",
            Self::GatewayTimeout => "gateway timeout",
            Self::Http => "http error",
        };
        f.write_str(name)
    }
}

/// Error returned for a response with a non-2xx status code.
///
/// Carries the classified kind plus the original response for inspection.
/// The message format is `"<status_code>: <body_text>"`.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use reddit_place::clients::{ErrorKind, HttpResponse, HttpResponseError};
///
/// let response = HttpResponse::new(403, HashMap::new(), "forbidden".to_string());
/// let error = HttpResponseError::from_response(&response).unwrap();
///
/// assert_eq!(error.kind, ErrorKind::Forbidden);
/// assert_eq!(error.to_string(), "403: forbidden");
/// ```
#[derive(Debug, Error)]
#[error("{code}: {body}")]
pub struct HttpResponseError {
    /// The classified kind of the status code.
    pub kind: ErrorKind,
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The full response.
    pub response: HttpResponse,
}

impl HttpResponseError {
    /// Builds the error for a response, or `None` if the response is 2xx.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Option<Self> {
        let kind = ErrorKind::classify(response.code)?;
        Some(Self {
            kind,
            code: response.code,
            body: response.body.clone(),
            response: response.clone(),
        })
    }
}

/// Error returned when transport failures outlast the retry budget.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last error: {source}")]
pub struct MaxHttpRetriesExceededError {
    /// The number of tries that were attempted.
    pub tries: u32,
    /// The error of the last attempt.
    #[source]
    pub source: reqwest::Error,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use reddit_place::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Transport failures persisted through every retry.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the classified kind when this error wraps a non-2xx response.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Response(e) => Some(e.kind),
            _ => None,
        }
    }
}
