//! Error type for the authenticated r/place client.
//!
//! # Example
//!
//! ```rust,ignore
//! use reddit_place::clients::ErrorKind;
//! use reddit_place::PlaceError;
//!
//! match client.write_pixel(5, 10, 3).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(e) if e.kind() == Some(ErrorKind::TooManyRequests) => {
//!         println!("Cooldown not over yet: {}", e);
//!     }
//!     Err(PlaceError::Auth(e)) => println!("Could not log in: {}", e),
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

use crate::auth::AuthError;
use crate::clients::{ErrorKind, HttpError};
use thiserror::Error;

/// Error type for [`PlaceClient`](super::PlaceClient) operations.
///
/// Token failures always surface as [`PlaceError::Auth`], whatever the
/// `raise_errors` setting. Domain responses only become
/// [`PlaceError::Http`] with `raise_errors` enabled, except for transport
/// failures which are always errors.
#[derive(Debug, Error)]
pub enum PlaceError {
    /// Obtaining an access token failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The domain request failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl PlaceError {
    /// Returns the classified kind when a non-2xx response caused the error.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Auth(e) => e.kind(),
            Self::Http(e) => e.kind(),
        }
    }
}

// Verify PlaceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PlaceError>();
};
