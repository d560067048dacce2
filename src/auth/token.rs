//! OAuth access tokens and their validity window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds before the real expiry at which a token stops being used.
///
/// Requests already in flight when a token expires would otherwise fail.
pub const EXPIRY_MARGIN_SECS: i64 = 120;

/// Access token response returned by the OAuth token endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccessTokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// The token type, `"bearer"` for Reddit.
    pub token_type: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
    /// Granted scopes, space separated.
    #[serde(default)]
    pub scope: Option<String>,
}

/// An access token together with the moment it was obtained.
///
/// A token is valid until `created_at + expires_in`, but is treated as
/// invalid [`EXPIRY_MARGIN_SECS`] seconds before that instant.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use reddit_place::TokenInfo;
///
/// let created_at = Utc::now();
/// let token = TokenInfo::new("abc", "bearer", 3600, created_at);
///
/// assert!(token.is_valid_at(created_at + Duration::seconds(3000)));
/// assert!(!token.is_valid_at(created_at + Duration::seconds(3521)));
/// assert_eq!(token.authorization_header(), "bearer abc");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// The bearer token.
    pub access_token: String,
    /// The token type used as the `Authorization` scheme.
    pub token_type: String,
    /// Lifetime of the token in seconds, as reported by the server.
    pub expires_in: i64,
    /// When the token was received.
    pub created_at: DateTime<Utc>,
    /// Granted scopes, if reported.
    pub scope: Option<String>,
}

impl TokenInfo {
    /// Creates a token obtained at `created_at`.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_in,
            created_at,
            scope: None,
        }
    }

    /// Builds a token from a token endpoint response received at `created_at`.
    #[must_use]
    pub fn from_response(response: AccessTokenResponse, created_at: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            created_at,
            scope: response.scope,
        }
    }

    /// Returns the instant the server considers the token expired.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| self.created_at.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns `true` if the token can still be used at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_MARGIN_SECS) < self.expires_at()
    }

    /// Returns `true` if the token can still be used now.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Returns the `Authorization` header value, `"<token_type> <access_token>"`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl std::fmt::Debug for TokenInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenInfo")
            .field("access_token", &"*****")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("created_at", &self.created_at)
            .field("scope", &self.scope)
            .finish()
    }
}

// Verify TokenInfo is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenInfo>();
};
