//! OAuth 2.0 Resource Owner Password Credentials Grant for Reddit script apps.
//!
//! Reddit "script" apps authenticate as a single account: the app's client
//! ID and secret go in an HTTP Basic header, and the account's username and
//! password go in a form body with `grant_type=password`.
//!
//! # Example
//!
//! ```rust,ignore
//! use reddit_place::auth::exchange_password_credentials;
//! use reddit_place::clients::{HttpClient, RetryPolicy};
//!
//! let http_client = HttpClient::new(RetryPolicy::disabled())?;
//! let token = exchange_password_credentials(&http_client, &config, &headers).await?;
//! println!("Token expires at {}", token.expires_at());
//! ```

use std::collections::HashMap;

use chrono::Utc;

use crate::auth::token::{AccessTokenResponse, TokenInfo};
use crate::auth::AuthError;
use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponseError,
    InvalidHttpRequestError,
};
use crate::config::ClientConfig;

/// Grant type for account credentials.
pub const PASSWORD_GRANT_TYPE: &str = "password";

const AUTHORIZATION: &str = "Authorization";

/// Exchanges the configured account credentials for an access token.
///
/// The returned token is stamped with the time the response was received.
///
/// # Arguments
///
/// * `http_client` - Transport used for the call (its retry policy applies)
/// * `config` - Client configuration holding credentials and the auth URL
/// * `headers` - Default headers sent along with the token request
///
/// # Errors
///
/// - [`AuthError::Http`] on transport failures or a non-2xx response
/// - [`AuthError::GrantRejected`] if Reddit answers with an OAuth error body
/// - [`AuthError::InvalidTokenResponse`] if the body cannot be parsed
pub async fn exchange_password_credentials(
    http_client: &HttpClient,
    config: &ClientConfig,
    headers: &HashMap<String, String>,
) -> Result<TokenInfo, AuthError> {
    let request = token_request(config, headers).map_err(HttpError::from)?;
    let response = http_client.request(&request).await?;

    if let Some(error) = HttpResponseError::from_response(&response) {
        return Err(AuthError::Http(error.into()));
    }

    let body: serde_json::Value =
        response
            .json()
            .map_err(|e| AuthError::InvalidTokenResponse {
                status: response.code,
                message: format!("Failed to parse token response: {e}"),
            })?;

    if let Some(error) = body.get("error") {
        let error = error
            .as_str()
            .map_or_else(|| error.to_string(), str::to_string);
        return Err(AuthError::GrantRejected { error });
    }

    let token_response: AccessTokenResponse =
        serde_json::from_value(body).map_err(|e| AuthError::InvalidTokenResponse {
            status: response.code,
            message: format!("Failed to parse token response: {e}"),
        })?;

    Ok(TokenInfo::from_response(token_response, Utc::now()))
}

/// Builds the token request. Basic credentials are the only `Authorization`
/// sent; any such header in `headers` is dropped.
fn token_request(
    config: &ClientConfig,
    headers: &HashMap<String, String>,
) -> Result<HttpRequest, InvalidHttpRequestError> {
    let headers = headers
        .iter()
        .filter(|(key, _)| !key.eq_ignore_ascii_case(AUTHORIZATION))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    HttpRequest::builder(HttpMethod::Post, config.auth_url().as_ref())
        .basic_auth(config.client_id().as_ref(), config.client_secret().as_ref())
        .extra_headers(headers)
        .body(serde_json::json!({
            "username": config.username().as_ref(),
            "password": config.password().as_ref(),
            "grant_type": PASSWORD_GRANT_TYPE,
        }))
        .body_type(DataType::Form)
        .build()
}
