//! Error types for client configuration.
//!
//! This module contains error types used when building a
//! [`ClientConfig`](crate::ClientConfig) and its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use reddit_place::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the ID of your Reddit script app.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the secret of your Reddit script app.")]
    EmptyClientSecret,

    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the Reddit account's username.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the Reddit account's password.")]
    EmptyPassword,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Backoff factor is negative or not a finite number.
    #[error("Invalid backoff factor {factor}. Expected a finite, non-negative number of seconds.")]
    InvalidBackoffFactor {
        /// The rejected factor.
        factor: f64,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://www.reddit.com/api/v1/access_token').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
