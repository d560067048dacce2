//! HTTP client types for the r/place API.
//!
//! This module provides the transport layer and the authenticated client
//! built on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async transport with retry and backoff
//! - [`HttpRequest`]: A request to be sent through the transport
//! - [`HttpResponse`]: A response, whatever its status code
//! - [`RetryPolicy`]: Retry count and backoff factor for transport failures
//! - [`ErrorKind`]: Semantic classification of non-2xx status codes
//! - [`place::PlaceClient`]: The authenticated client exposing `write_pixel`
//!
//! # Retry Behavior
//!
//! Only transport failures (connection refused, timeouts, truncated reads)
//! are retried. Before retry `n` the transport sleeps
//! `backoff_factor * 2^(n - 1)` seconds. Responses with any HTTP status,
//! including 429 and 5xx, are returned as-is.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod place;
mod retry;

pub use errors::{
    ErrorKind, HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::HttpClient;
pub use http_request::{BasicAuth, DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use retry::{RetryPolicy, MAX_BACKOFF};

pub use place::{PlaceClient, PlaceError};
