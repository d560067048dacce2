//! Configuration types for the r/place client.
//!
//! This module provides the configuration used to construct a
//! [`PlaceClient`](crate::PlaceClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The configuration struct holding credentials and transport settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`ClientId`], [`ClientSecret`]: Validated OAuth app credentials
//! - [`Username`], [`Password`]: Validated Reddit account credentials
//! - [`EndpointUrl`]: A validated absolute URL for the auth and query endpoints
//!
//! # Example
//!
//! ```rust
//! use reddit_place::{ClientConfig, ClientId, ClientSecret, Username, Password};
//!
//! let config = ClientConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .username(Username::new("my-user").unwrap())
//!     .password(Password::new("my-password").unwrap())
//!     .retries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retries(), Some(3));
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret, EndpointUrl, Password, Username};

use std::collections::HashMap;

use crate::clients::RetryPolicy;
use crate::error::ConfigError;

/// Default backoff factor, in seconds, for the retry algorithm.
pub const DEFAULT_BACKOFF_FACTOR: f64 = 0.3;

/// Default OAuth token endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Default GraphQL endpoint used for canvas mutations.
pub const DEFAULT_QUERY_URL: &str = "https://gql-realtime-2.reddit.com/query";

/// Configuration for a [`PlaceClient`](crate::PlaceClient).
///
/// Holds the OAuth app and account credentials, the error policy, and the
/// transport settings. It is set once at construction and never mutated.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
///
/// # External HTTP Client
///
/// When an external [`reqwest::Client`] is supplied, `retries` and
/// `backoff_factor` are ignored and [`ClientConfig::retry_policy`] reports
/// retries as disabled.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    username: Username,
    password: Password,
    raise_errors: bool,
    retries: Option<u32>,
    backoff_factor: f64,
    headers: HashMap<String, String>,
    auth_url: EndpointUrl,
    query_url: EndpointUrl,
    http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the OAuth client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the Reddit username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the Reddit password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns whether non-2xx domain responses are turned into errors.
    #[must_use]
    pub const fn raise_errors(&self) -> bool {
        self.raise_errors
    }

    /// Returns the configured retry count, if any.
    #[must_use]
    pub const fn retries(&self) -> Option<u32> {
        self.retries
    }

    /// Returns the backoff factor in seconds.
    #[must_use]
    pub fn backoff_factor(&self) -> f64 {
        self.backoff_factor
    }

    /// Returns the extra default headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the OAuth token endpoint.
    #[must_use]
    pub const fn auth_url(&self) -> &EndpointUrl {
        &self.auth_url
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn query_url(&self) -> &EndpointUrl {
        &self.query_url
    }

    /// Returns the externally supplied HTTP client, if any.
    #[must_use]
    pub const fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Returns the `User-Agent` value derived from the username.
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("{}/0.1", self.username.as_ref())
    }

    /// Returns the retry policy the transport should apply.
    ///
    /// Retries are disabled when no retry count was configured, when it is
    /// zero, or when an external HTTP client was supplied.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        match (self.http_client.is_some(), self.retries) {
            (false, Some(retries)) if retries > 0 => RetryPolicy::new(retries, self.backoff_factor),
            _ => RetryPolicy::disabled(),
        }
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `client_id`, `client_secret`, `username` and
/// `password`.
///
/// # Defaults
///
/// - `raise_errors`: `false`
/// - `retries`: `None` (disabled)
/// - `backoff_factor`: `0.3`
/// - `headers`: empty
/// - `auth_url`: [`DEFAULT_AUTH_URL`]
/// - `query_url`: [`DEFAULT_QUERY_URL`]
/// - `http_client`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    username: Option<Username>,
    password: Option<Password>,
    raise_errors: Option<bool>,
    retries: Option<u32>,
    backoff_factor: Option<f64>,
    headers: Option<HashMap<String, String>>,
    auth_url: Option<EndpointUrl>,
    query_url: Option<EndpointUrl>,
    http_client: Option<reqwest::Client>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the OAuth client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the Reddit username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the Reddit password (required).
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets whether non-2xx domain responses should be returned as errors.
    #[must_use]
    pub const fn raise_errors(mut self, raise_errors: bool) -> Self {
        self.raise_errors = Some(raise_errors);
        self
    }

    /// Sets the maximum number of retries on connection and read failures.
    ///
    /// Zero disables retries.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Sets the backoff factor, in seconds, for the retry algorithm.
    ///
    /// `0.0` retries without sleeping.
    #[must_use]
    pub fn backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = Some(factor);
        self
    }

    /// Sets all extra default headers at once, replacing earlier ones.
    ///
    /// Header names are unique case-insensitively. When `headers` holds
    /// names differing only in case, the last one in byte order is kept.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        let mut entries: Vec<_> = headers.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        self.headers = Some(HashMap::new());
        for (key, value) in entries {
            self = self.header(key, value);
        }
        self
    }

    /// Adds a single extra default header.
    ///
    /// Replaces any header with the same name, compared case-insensitively.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let headers = self.headers.get_or_insert_with(HashMap::new);
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
        headers.insert(key, value.into());
        self
    }

    /// Overrides the OAuth token endpoint.
    #[must_use]
    pub fn auth_url(mut self, url: EndpointUrl) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Overrides the GraphQL endpoint.
    #[must_use]
    pub fn query_url(mut self, url: EndpointUrl) -> Self {
        self.query_url = Some(url);
        self
    }

    /// Supplies the HTTP client to use instead of creating one.
    ///
    /// When set, `retries` and `backoff_factor` are ignored.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a credential is not
    /// set, or [`ConfigError::InvalidBackoffFactor`] if the backoff factor is
    /// negative or not finite.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self.client_secret.ok_or(ConfigError::MissingRequiredField {
            field: "client_secret",
        })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;

        let backoff_factor = self.backoff_factor.unwrap_or(DEFAULT_BACKOFF_FACTOR);
        if !backoff_factor.is_finite() || backoff_factor < 0.0 {
            return Err(ConfigError::InvalidBackoffFactor {
                factor: backoff_factor,
            });
        }

        let auth_url = match self.auth_url {
            Some(url) => url,
            None => EndpointUrl::new(DEFAULT_AUTH_URL)?,
        };
        let query_url = match self.query_url {
            Some(url) => url,
            None => EndpointUrl::new(DEFAULT_QUERY_URL)?,
        };

        Ok(ClientConfig {
            client_id,
            client_secret,
            username,
            password,
            raise_errors: self.raise_errors.unwrap_or(false),
            retries: self.retries,
            backoff_factor,
            headers: self.headers.unwrap_or_default(),
            auth_url,
            query_url,
            http_client: self.http_client,
        })
    }
}
