//! Authentication error types.
//!
//! # Error Types
//!
//! - [`AuthError::Http`]: The token request failed at the HTTP level,
//!   including non-2xx responses classified by [`ErrorKind`](crate::clients::ErrorKind)
//! - [`AuthError::GrantRejected`]: The token endpoint answered 2xx with an OAuth error
//! - [`AuthError::InvalidTokenResponse`]: The token endpoint answered 2xx with an unreadable body
//!
//! # Example
//!
//! ```rust
//! use reddit_place::auth::AuthError;
//!
//! let error = AuthError::GrantRejected {
//!     error: "invalid_grant".to_string(),
//! };
//! assert_eq!(error.to_string(), "Token request rejected: invalid_grant");
//! ```

use crate::clients::{ErrorKind, HttpError};
use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrapped HTTP client error.
    ///
    /// A non-2xx token response arrives here as [`HttpError::Response`].
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The token endpoint reported an OAuth error with a 2xx status.
    ///
    /// Reddit answers wrong account credentials this way
    /// (`{"error": "invalid_grant"}`).
    #[error("Token request rejected: {error}")]
    GrantRejected {
        /// The OAuth error code returned.
        error: String,
    },

    /// The token response could not be parsed.
    #[error("Invalid access token response with status {status}: {message}")]
    InvalidTokenResponse {
        /// The HTTP status code returned.
        status: u16,
        /// Description of the parse failure.
        message: String,
    },
}

impl AuthError {
    /// Returns the classified kind when the token endpoint answered non-2xx.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Http(e) => e.kind(),
            _ => None,
        }
    }
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
