//! # Reddit r/place Client
//!
//! A Rust client for the Reddit r/place canvas, providing type-safe
//! configuration, automatic access token management, and an HTTP transport
//! with retry logic for placing pixels.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for app and account credentials
//! - OAuth 2.0 password grant for Reddit "script" apps via [`auth`]
//! - Lazy token acquisition and renewal shortly before expiry
//! - Async HTTP client with retry and exponential backoff on transport failures
//! - Status-code classification of failed responses via [`ErrorKind`]
//! - The r/place palette via [`Color`]
//!
//! ## Quick Start
//!
//! ```rust
//! use reddit_place::{ClientConfig, ClientId, ClientSecret, Password, Username};
//!
//! // Create configuration using the builder pattern
//! let config = ClientConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .username(Username::new("your-username").unwrap())
//!     .password(Password::new("your-password").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.user_agent(), "your-username/0.1");
//! ```
//!
//! ## Placing Pixels
//!
//! ```rust,ignore
//! use reddit_place::{ClientConfig, Color, PlaceClient};
//!
//! let client = PlaceClient::new(config)?;
//!
//! // A token is requested on the first call and reused afterwards
//! let response = client.write_pixel(5, 10, Color::Red).await?;
//! println!("Status: {}", response.code);
//!
//! // Raw palette indices are accepted too
//! client.write_pixel(6, 10, 3).await?;
//! ```
//!
//! ## Error Handling
//!
//! By default, non-2xx responses from the canvas are returned to the caller
//! unchanged. Enable `raise_errors` to turn them into errors:
//!
//! ```rust,ignore
//! use reddit_place::{ClientConfig, ErrorKind, PlaceClient};
//!
//! let config = ClientConfig::builder()
//!     // ...credentials...
//!     .raise_errors(true)
//!     .build()?;
//! let client = PlaceClient::new(config)?;
//!
//! match client.write_pixel(5, 10, 3).await {
//!     Ok(response) => println!("Placed: {}", response.body),
//!     Err(e) if e.kind() == Some(ErrorKind::Forbidden) => println!("Not allowed: {e}"),
//!     Err(e) => println!("Failed: {e}"),
//! }
//! ```
//!
//! Failures while obtaining a token are always reported as errors.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Pass-through payloads**: Coordinates and colors are not validated locally

pub mod auth;
pub mod clients;
pub mod colors;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, TokenInfo};
pub use colors::{Color, UnknownColorError};
pub use config::{
    ClientConfig, ClientConfigBuilder, ClientId, ClientSecret, EndpointUrl, Password, Username,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, ErrorKind, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    RetryPolicy,
};

// Re-export the authenticated client
pub use clients::place::{PlaceClient, PlaceError, SetPixelMutation};
