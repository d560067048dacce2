//! HTTP transport for the r/place client.
//!
//! This module provides the [`HttpClient`] type: a reusable connection pool
//! plus the retry policy applied to connection and read failures.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::retry::RetryPolicy;

/// HTTP transport with transparent retry on transport failures.
///
/// The client handles:
/// - Connection reuse through a single [`reqwest::Client`]
/// - Header, Basic auth and body encoding
/// - Retry with exponential backoff on connection and read failures
///
/// HTTP status codes are never retried: every response is returned as an
/// [`HttpResponse`], whatever its status.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use reddit_place::clients::{HttpClient, HttpRequest, HttpMethod, RetryPolicy};
///
/// let client = HttpClient::new(RetryPolicy::new(3, 0.3))?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://www.reddit.com/api/v1/me")
///     .build()
///     .unwrap();
///
/// let response = client.request(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    retry_policy: RetryPolicy,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(retry_policy: RetryPolicy) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self {
            client,
            retry_policy,
        })
    }

    /// Creates a transport around an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, retry_policy: RetryPolicy) -> Self {
        Self {
            client,
            retry_policy,
        }
    }

    /// Returns the retry policy applied by this transport.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Sends an HTTP request, retrying transport failures.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A transport failure occurs and retries are disabled (`Network`)
    /// - Transport failures persist through every retry (`MaxRetries`)
    ///
    /// Non-2xx responses are not errors at this layer.
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let max_tries = self.retry_policy.max_tries();
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let error = match self.send(request).await {
                Ok(response) => return Ok(response),
                Err(error) => error,
            };

            if !Self::is_retryable(&error) {
                return Err(HttpError::Network(error));
            }

            if tries >= max_tries {
                if max_tries == 1 {
                    return Err(HttpError::Network(error));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    tries,
                    source: error,
                }));
            }

            let delay = self.retry_policy.delay_for(tries);
            tracing::warn!(
                "Request to {} failed on attempt {}/{}: {}. Retrying in {:?}",
                request.url,
                tries,
                max_tries,
                error,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Sends a single attempt and reads the whole body.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        if let Some(headers) = &request.extra_headers {
            for (key, value) in headers {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some(auth) = &request.basic_auth {
            req_builder = req_builder.basic_auth(&auth.username, Some(&auth.password));
        }

        if let (Some(body), Some(body_type)) = (&request.body, request.body_type) {
            req_builder = match body_type {
                DataType::Json => req_builder.json(body),
                DataType::Form => req_builder.form(body),
            };
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Connection, timeout and read failures are retried; malformed requests are not.
    fn is_retryable(error: &reqwest::Error) -> bool {
        !error.is_builder() && !error.is_redirect() && !error.is_decode()
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_with_client_keeps_retry_policy() {
        let client = HttpClient::with_client(reqwest::Client::new(), RetryPolicy::new(2, 0.1));
        assert_eq!(client.retry_policy().retries(), 2);
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_sending() {
        let client = HttpClient::new(RetryPolicy::disabled()).unwrap();
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            url: "http://127.0.0.1:1/never".to_string(),
            body: None,
            body_type: None,
            extra_headers: None,
            basic_auth: None,
        };

        let result = client.request(&request).await;
        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_non_2xx_response_is_returned_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(RetryPolicy::new(3, 0.0)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, format!("{}/broken", mock_server.uri()))
            .build()
            .unwrap();

        let response = client.request(&request).await.unwrap();
        assert_eq!(response.code, 500);
        assert_eq!(response.body, "boom");
    }

    #[tokio::test]
    async fn test_form_body_and_headers_are_sent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header("x-custom", "yes"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=password"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(RetryPolicy::disabled()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Post, format!("{}/token", mock_server.uri()))
            .header("X-Custom", "yes")
            .body(serde_json::json!({"grant_type": "password"}))
            .body_type(DataType::Form)
            .build()
            .unwrap();

        let response = client.request(&request).await.unwrap();
        assert!(response.is_ok());
        assert_eq!(response.body, "ok");
    }

    #[tokio::test]
    async fn test_connection_failure_without_retries_is_network_error() {
        let client = HttpClient::new(RetryPolicy::disabled()).unwrap();
        // Port 1 is reserved and refuses connections.
        let request = HttpRequest::builder(HttpMethod::Get, "http://127.0.0.1:1/")
            .build()
            .unwrap();

        let result = client.request(&request).await;
        assert!(matches!(result, Err(HttpError::Network(_))));
    }

    #[tokio::test]
    async fn test_connection_failure_with_retries_exhausts_budget() {
        let client = HttpClient::new(RetryPolicy::new(2, 0.0)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "http://127.0.0.1:1/")
            .build()
            .unwrap();

        match client.request(&request).await {
            Err(HttpError::MaxRetries(e)) => {
                assert_eq!(e.tries, 3);
                assert!(e.to_string().contains("Exceeded maximum retry count of 3"));
            }
            other => panic!("Expected MaxRetries error, got {other:?}"),
        }
    }
}
