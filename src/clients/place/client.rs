//! Authenticated client for the r/place API.
//!
//! This module provides the [`PlaceClient`] type, which owns the credentials,
//! the transport and the access token, and exposes pixel placement.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::auth::{exchange_password_credentials, TokenInfo};
use crate::clients::place::mutation::SetPixelMutation;
use crate::clients::place::PlaceError;
use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
};
use crate::config::ClientConfig;

const AUTHORIZATION: &str = "Authorization";
const USER_AGENT: &str = "User-Agent";

/// Authenticated client for the r/place API.
///
/// The client lazily obtains an access token on the first request and
/// requests a new one whenever the stored token is missing or about to
/// expire. Every outgoing request carries the token in its `Authorization`
/// header.
///
/// # Header Precedence
///
/// Headers are resolved in layers, later layers winning:
///
/// 1. Extra default headers from [`ClientConfig::headers`]
/// 2. `User-Agent: <username>/0.1`
/// 3. Per-call headers from the [`HttpRequest`]
/// 4. `Authorization: <token_type> <access_token>`, which always wins
///
/// Header names are compared case-insensitively.
///
/// # Error Policy
///
/// Token failures always fail the call. Non-2xx domain responses are
/// returned as-is unless [`ClientConfig::raise_errors`] is set, in which
/// case they become [`PlaceError::Http`].
///
/// # Thread Safety
///
/// `PlaceClient` is `Send + Sync`. The token sits behind an async mutex held
/// across a refresh, so concurrent calls share a single token request.
///
/// # Example
///
/// ```rust,ignore
/// use reddit_place::{ClientConfig, ClientId, ClientSecret, Color, Password, PlaceClient, Username};
///
/// let config = ClientConfig::builder()
///     .client_id(ClientId::new("my-client-id")?)
///     .client_secret(ClientSecret::new("my-secret")?)
///     .username(Username::new("my-user")?)
///     .password(Password::new("my-password")?)
///     .retries(3)
///     .build()?;
///
/// let client = PlaceClient::new(config)?;
/// let response = client.write_pixel(5, 10, Color::Red).await?;
/// println!("Status: {}", response.code);
/// ```
#[derive(Debug)]
pub struct PlaceClient {
    config: ClientConfig,
    http_client: HttpClient,
    default_headers: HashMap<String, String>,
    token: Mutex<Option<TokenInfo>>,
}

// Verify PlaceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PlaceClient>();
};

impl PlaceClient {
    /// Creates a new client without a token.
    ///
    /// Uses the HTTP client from the configuration when one was supplied,
    /// otherwise creates one with the configured retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::Http`] if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, PlaceError> {
        let retry_policy = config.retry_policy();
        let http_client = match config.http_client() {
            Some(client) => HttpClient::with_client(client.clone(), retry_policy),
            None => HttpClient::new(retry_policy)?,
        };

        let mut default_headers = config.headers().clone();
        default_headers.retain(|key, _| !key.eq_ignore_ascii_case(USER_AGENT));
        default_headers.insert(USER_AGENT.to_string(), config.user_agent());

        Ok(Self {
            config,
            http_client,
            default_headers,
            token: Mutex::new(None),
        })
    }

    /// Returns the configuration of this client.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the transport used by this client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the default headers sent with every request, token excluded.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns a snapshot of the stored token, valid or not.
    pub async fn token_info(&self) -> Option<TokenInfo> {
        self.token.lock().await.clone()
    }

    /// Replaces the stored token, e.g. with one persisted from an earlier run.
    pub async fn set_token_info(&self, token: TokenInfo) {
        *self.token.lock().await = Some(token);
    }

    /// Returns `true` if a stored token exists and is still usable.
    pub async fn has_valid_token(&self) -> bool {
        self.token
            .lock()
            .await
            .as_ref()
            .is_some_and(TokenInfo::is_valid)
    }

    /// Returns a valid token, requesting a new one if needed.
    ///
    /// On failure the stored token is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::Auth`] if the token request fails, whatever the
    /// `raise_errors` setting.
    pub async fn ensure_valid_token(&self) -> Result<TokenInfo, PlaceError> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref().filter(|t| t.is_valid()) {
            return Ok(current.clone());
        }

        tracing::debug!(
            "Requesting access token for {} from {}",
            self.config.username().as_ref(),
            self.config.auth_url()
        );
        let fresh =
            exchange_password_credentials(&self.http_client, &self.config, &self.default_headers)
                .await?;
        tracing::debug!("Obtained access token valid for {} seconds", fresh.expires_in);

        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Resolves the headers of a request carrying `token`.
    ///
    /// See the type-level documentation for the precedence order.
    #[must_use]
    pub fn resolve_headers(
        &self,
        token: &TokenInfo,
        extra: Option<&HashMap<String, String>>,
    ) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();

        for (key, value) in extra.into_iter().flatten() {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            headers.insert(key.clone(), value.clone());
        }

        headers.retain(|key, _| !key.eq_ignore_ascii_case(AUTHORIZATION));
        headers.insert(AUTHORIZATION.to_string(), token.authorization_header());
        headers
    }

    /// Sends an authenticated request.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError`] if:
    /// - A valid token cannot be obtained (`Auth`)
    /// - The request is invalid or the transport fails (`Http`)
    /// - `raise_errors` is set and the response is non-2xx (`Http`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, PlaceError> {
        let token = self.ensure_valid_token().await?;
        let headers = self.resolve_headers(&token, request.extra_headers.as_ref());
        let request = HttpRequest {
            extra_headers: Some(headers),
            ..request
        };

        tracing::debug!("Sending {} request to {}", request.http_method, request.url);
        let response = self.http_client.request(&request).await?;

        if self.config.raise_errors() {
            if let Some(error) = HttpResponseError::from_response(&response) {
                return Err(HttpError::from(error).into());
            }
        }

        Ok(response)
    }

    /// Places a pixel on the canvas.
    ///
    /// `x`, `y` and `color_index` are sent as given; bounds, palette and
    /// cooldown are enforced by Reddit. `color_index` accepts a raw index
    /// or a [`Color`](crate::Color).
    ///
    /// # Errors
    ///
    /// Same as [`PlaceClient::request`].
    pub async fn write_pixel(
        &self,
        x: i64,
        y: i64,
        color_index: impl Into<i64>,
    ) -> Result<HttpResponse, PlaceError> {
        let mutation = SetPixelMutation::new(x, y, color_index.into());
        let request = HttpRequest::builder(HttpMethod::Post, self.config.query_url().as_ref())
            .body(mutation.to_json())
            .body_type(DataType::Json)
            .build()
            .map_err(HttpError::from)?;

        self.request(request).await
    }
}
