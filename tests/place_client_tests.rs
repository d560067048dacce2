//! Integration tests for the authenticated r/place client.
//!
//! These tests run the client against a mock Reddit and verify:
//! - Lazy token acquisition and reuse
//! - Renewal of expired tokens and propagation of renewal failures
//! - The `raise_errors` policy for domain responses
//! - Header precedence and the pixel mutation body

use chrono::{Duration, Utc};
use reddit_place::auth::AuthError;
use reddit_place::{
    ClientConfig, ClientId, ClientSecret, Color, EndpointUrl, ErrorKind, HttpError, HttpMethod,
    HttpRequest, Password, PlaceClient, PlaceError, TokenInfo, Username,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/api/v1/access_token";
const QUERY_PATH: &str = "/query";

fn create_config(server: &MockServer, raise_errors: bool) -> ClientConfig {
    ClientConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .username(Username::new("painter").unwrap())
        .password(Password::new("hunter2").unwrap())
        .raise_errors(raise_errors)
        .auth_url(EndpointUrl::new(format!("{}{TOKEN_PATH}", server.uri())).unwrap())
        .query_url(EndpointUrl::new(format!("{}{QUERY_PATH}", server.uri())).unwrap())
        .build()
        .unwrap()
}

async fn mount_token_endpoint(server: &MockServer, access_token: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": access_token,
            "token_type": "bearer",
            "expires_in": 3600,
            "scope": "*"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_query_endpoint(server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({"data": {}})))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn expired_token(access_token: &str) -> TokenInfo {
    TokenInfo::new(
        access_token,
        "bearer",
        3600,
        Utc::now() - Duration::hours(2),
    )
}

// ============================================================================
// Token lifecycle
// ============================================================================

#[tokio::test]
async fn test_first_call_requests_exactly_one_token() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(header("authorization", "bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();
    assert!(client.token_info().await.is_none());

    let response = assert_ok!(client.write_pixel(5, 10, 3).await);

    assert_eq!(response.code, 200);
    assert!(client.has_valid_token().await);
    assert_eq!(client.token_info().await.unwrap().access_token, "token-1");
}

#[tokio::test]
async fn test_valid_token_is_reused_across_calls() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    mount_query_endpoint(&server, 200, 3).await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();

    for x in 0..3 {
        assert_ok!(client.write_pixel(x, 0, Color::White).await);
    }
}

#[tokio::test]
async fn test_concurrent_calls_share_one_token_request() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    mount_query_endpoint(&server, 200, 2).await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();

    let (first, second) = tokio::join!(
        client.write_pixel(1, 1, Color::Red),
        client.write_pixel(2, 2, Color::Blue)
    );

    assert_ok!(first);
    assert_ok!(second);
}

#[tokio::test]
async fn test_expired_token_is_renewed_before_request() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-2", 1).await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(header("authorization", "bearer token-2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();
    client.set_token_info(expired_token("token-1")).await;
    assert!(!client.has_valid_token().await);

    assert_ok!(client.write_pixel(0, 0, 0).await);

    assert_eq!(client.token_info().await.unwrap().access_token, "token-2");
}

#[tokio::test]
async fn test_token_within_expiry_margin_is_renewed() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-2", 1).await;
    mount_query_endpoint(&server, 200, 1).await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();
    // 100 seconds left, inside the 120 second margin
    client
        .set_token_info(TokenInfo::new(
            "token-1",
            "bearer",
            3600,
            Utc::now() - Duration::seconds(3500),
        ))
        .await;

    assert_ok!(client.write_pixel(0, 0, 0).await);
    assert_eq!(client.token_info().await.unwrap().access_token, "token-2");
}

#[tokio::test]
async fn test_token_failure_propagates_without_raise_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    mount_query_endpoint(&server, 200, 0).await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();
    client.set_token_info(expired_token("stale")).await;

    let error = assert_err!(client.write_pixel(5, 10, 3).await);

    assert!(matches!(error, PlaceError::Auth(AuthError::Http(_))));
    assert_eq!(error.kind(), Some(ErrorKind::Server));
    assert_eq!(error.to_string(), "500: boom");
    // The stale token stays in place after a failed renewal
    assert_eq!(client.token_info().await.unwrap().access_token, "stale");
}

#[tokio::test]
async fn test_rejected_grant_is_an_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;
    mount_query_endpoint(&server, 200, 0).await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();
    let result = client.write_pixel(5, 10, 3).await;

    assert!(matches!(
        result,
        Err(PlaceError::Auth(AuthError::GrantRejected { ref error })) if error == "invalid_grant"
    ));
    assert!(client.token_info().await.is_none());
}

// ============================================================================
// Error policy
// ============================================================================

#[tokio::test]
async fn test_error_response_returned_when_raise_errors_disabled() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();
    let response = assert_ok!(client.write_pixel(5, 10, 3).await);

    assert_eq!(response.code, 403);
    assert_eq!(response.body, "forbidden");
    assert!(!response.is_ok());
}

#[tokio::test]
async fn test_error_response_raised_when_raise_errors_enabled() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = PlaceClient::new(create_config(&server, true)).unwrap();
    let error = assert_err!(client.write_pixel(5, 10, 3).await);

    assert_eq!(error.kind(), Some(ErrorKind::Forbidden));
    assert_eq!(error.to_string(), "403: forbidden");
    match error {
        PlaceError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 403);
            assert_eq!(e.response.body, "forbidden");
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unlisted_status_raises_generic_kind() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    mount_query_endpoint(&server, 418, 1).await;

    let client = PlaceClient::new(create_config(&server, true)).unwrap();
    let error = assert_err!(client.write_pixel(5, 10, 3).await);

    assert_eq!(error.kind(), Some(ErrorKind::Http));
}

#[tokio::test]
async fn test_success_is_returned_when_raise_errors_enabled() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    mount_query_endpoint(&server, 200, 1).await;

    let client = PlaceClient::new(create_config(&server, true)).unwrap();
    let response = assert_ok!(client.write_pixel(5, 10, 3).await);

    assert_eq!(response.code, 200);
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_write_pixel_sends_set_pixel_mutation() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", "painter/0.1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();
    assert_ok!(client.write_pixel(5, 10, 3).await);

    let requests = server.received_requests().await.unwrap();
    let query = requests
        .iter()
        .find(|r| r.url.path() == QUERY_PATH)
        .unwrap();
    let body: serde_json::Value = query.body_json().unwrap();

    assert_eq!(body["operationName"], "setPixel");
    assert_eq!(body["variables"]["input"]["actionName"], "r/replace:set_pixel");
    assert_eq!(
        body["variables"]["input"]["PixelMessageData"],
        json!({"coordinate": {"x": 5, "y": 10}, "colorIndex": 3, "canvasIndex": 0})
    );
    assert!(body["query"]
        .as_str()
        .unwrap()
        .starts_with("mutation setPixel"));
}

#[tokio::test]
async fn test_write_pixel_passes_values_through_unchecked() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    mount_query_endpoint(&server, 200, 1).await;

    let client = PlaceClient::new(create_config(&server, false)).unwrap();
    assert_ok!(client.write_pixel(-1, 5000, 99).await);

    let requests = server.received_requests().await.unwrap();
    let query = requests
        .iter()
        .find(|r| r.url.path() == QUERY_PATH)
        .unwrap();
    let body: serde_json::Value = query.body_json().unwrap();
    let data = &body["variables"]["input"]["PixelMessageData"];

    assert_eq!(data["coordinate"]["x"], -1);
    assert_eq!(data["coordinate"]["y"], 5000);
    assert_eq!(data["colorIndex"], 99);
}

#[tokio::test]
async fn test_token_request_carries_user_agent_and_default_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("user-agent", "painter/0.1"))
        .and(header("x-team", "blue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-1",
            "token_type": "bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(header("x-team", "blue"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .username(Username::new("painter").unwrap())
        .password(Password::new("hunter2").unwrap())
        .header("X-Team", "blue")
        .auth_url(EndpointUrl::new(format!("{}{TOKEN_PATH}", server.uri())).unwrap())
        .query_url(EndpointUrl::new(format!("{}{QUERY_PATH}", server.uri())).unwrap())
        .build()
        .unwrap();

    let client = PlaceClient::new(config).unwrap();
    assert_ok!(client.write_pixel(1, 2, Color::Black).await);
}

#[tokio::test]
async fn test_authorization_header_wins_over_per_call_header() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .and(header("authorization", "bearer token-1"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "painter"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = PlaceClient::new(create_config(&server, true)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/api/v1/me", server.uri()))
        .header("Authorization", "bearer forged")
        .header("X-Trace", "abc")
        .build()
        .unwrap();

    let response = assert_ok!(client.request(request).await);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["name"], "painter");
}

#[tokio::test]
async fn test_transport_failure_is_an_http_error() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "token-1", 1).await;

    let config = ClientConfig::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .username(Username::new("painter").unwrap())
        .password(Password::new("hunter2").unwrap())
        .auth_url(EndpointUrl::new(format!("{}{TOKEN_PATH}", server.uri())).unwrap())
        .query_url(EndpointUrl::new("http://127.0.0.1:1/query").unwrap())
        .build()
        .unwrap();

    let client = PlaceClient::new(config).unwrap();
    let error = assert_err!(client.write_pixel(5, 10, 3).await);

    assert!(matches!(error, PlaceError::Http(HttpError::Network(_))));
    assert_eq!(error.kind(), None);
}
