//! Authentication types for the r/place client.
//!
//! This module provides the access token type and the password grant used
//! to obtain it.
//!
//! # Overview
//!
//! - [`TokenInfo`]: An access token with its validity window
//! - [`AccessTokenResponse`]: The raw token endpoint response
//! - [`exchange_password_credentials`]: OAuth 2.0 password grant against Reddit
//! - [`AuthError`]: Failures while obtaining a token
//!
//! # Token Lifecycle
//!
//! Tokens are not refreshed by a timer. [`PlaceClient`](crate::PlaceClient)
//! checks [`TokenInfo::is_valid`] before every request and performs a new
//! password grant when the stored token is missing or within
//! [`EXPIRY_MARGIN_SECS`] of its expiry.

mod error;
pub mod password_grant;
pub mod token;

pub use error::AuthError;
pub use password_grant::{exchange_password_credentials, PASSWORD_GRANT_TYPE};
pub use token::{AccessTokenResponse, TokenInfo, EXPIRY_MARGIN_SECS};
