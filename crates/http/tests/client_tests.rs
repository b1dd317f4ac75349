//! Integration tests for the EduNexus HTTP client

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use edunexus_core::{MemoryTokenStore, TokenPair, TokenStore};
use edunexus_http::client::expiry;
use edunexus_http::types::{LoginRequest, RegisterRequest};
use edunexus_http::{ApiClient, ClientError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

fn sample_user(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "username": "jdoe",
        "email": "a@b.com",
        "first_name": "Jane",
        "last_name": "Doe",
        "is_active": true,
        "date_joined": "2024-09-01T08:30:00Z"
    })
}

fn client_with(store: Arc<MemoryTokenStore>, base_url: &str) -> ApiClient {
    ApiClient::builder()
        .base_url(base_url)
        .token_store(store)
        .build()
        .unwrap()
}

/// Matches requests carrying no Authorization header at all.
struct NoAuthHeader;

impl Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

#[tokio::test]
async fn builder_requires_base_url() {
    let result = ApiClient::builder()
        .token_store(Arc::new(MemoryTokenStore::new()))
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn builder_requires_token_store() {
    let result = ApiClient::builder().base_url("http://localhost:8000/api").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn builder_trims_trailing_slash() {
    let client = client_with(
        Arc::new(MemoryTokenStore::new()),
        "http://localhost:8000/api/",
    );
    assert_eq!(client.base_url(), "http://localhost:8000/api");
}

#[tokio::test]
async fn login_returns_user_and_tokens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(json!({"email": "a@b.com", "password": "x"})))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": sample_user(1),
            "access": "A1",
            "refresh": "R1",
            "message": "Login successful"
        })))
        .mount(&mock_server)
        .await;

    let client = client_with(Arc::new(MemoryTokenStore::new()), &mock_server.uri());
    let response = client
        .login(&LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.user.id, 1);
    assert_eq!(response.access, "A1");
    assert_eq!(response.refresh, "R1");
}

#[tokio::test]
async fn login_failure_maps_to_authentication_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&mock_server)
        .await;

    let client = client_with(Arc::new(MemoryTokenStore::new()), &mock_server.uri());
    let result = client
        .login(&LoginRequest {
            email: "a@b.com".into(),
            password: "wrong".into(),
        })
        .await;

    // No refresh token is stored, so the 401 propagates unchanged.
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn register_validation_error_maps_to_validation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"password_confirm": ["Passwords do not match."]})),
        )
        .mount(&mock_server)
        .await;

    let client = client_with(Arc::new(MemoryTokenStore::new()), &mock_server.uri());
    let result = client
        .register(&RegisterRequest {
            username: "jdoe".into(),
            email: "a@b.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            password: "x".into(),
            password_confirm: "y".into(),
            phone: None,
        })
        .await;

    assert!(matches!(result, Err(ClientError::Validation(_))));
}

#[tokio::test]
async fn bearer_token_attached_when_stored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": sample_user(1),
            "roles": ["student"]
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair {
        access: "A1".into(),
        refresh: "R1".into(),
    }));
    let client = client_with(store, &mock_server.uri());

    let profile = client.profile().await.unwrap();
    assert_eq!(profile.roles, vec!["student".to_string()]);
}

#[tokio::test]
async fn stale_access_token_renewed_transparently() {
    let mock_server = MockServer::start().await;

    // The original request with the stale token is rejected once.
    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .and(body_json(json!({"refresh": "R1"})))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The retry goes out with the renewed token and succeeds.
    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": sample_user(1),
            "roles": ["student", "faculty"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair {
        access: "A1".into(),
        refresh: "R1".into(),
    }));
    let client = client_with(store.clone(), &mock_server.uri());

    let profile = client.profile().await.unwrap();
    assert_eq!(profile.user.id, 1);
    assert_eq!(profile.roles, vec!["student".to_string(), "faculty".to_string()]);

    assert_eq!(store.access_token().as_deref(), Some("A2"));
    assert_eq!(store.refresh_token().as_deref(), Some("R1"));
}

#[tokio::test]
async fn refresh_failure_clears_tokens_and_fires_hook() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("refresh token expired"))
        .mount(&mock_server)
        .await;

    let expired = Rc::new(Cell::new(false));
    {
        let expired = expired.clone();
        expiry::on_session_expired(Rc::new(move || expired.set(true)));
    }

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair {
        access: "A1".into(),
        refresh: "R1".into(),
    }));
    let client = client_with(store.clone(), &mock_server.uri());

    let result = client.profile().await;
    assert!(matches!(result, Err(ClientError::RefreshFailed(_))));

    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
    assert!(expired.get());

    expiry::clear_session_expired_hook();
}

#[tokio::test]
async fn missing_refresh_token_propagates_401_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set_access_token("A1");
    let client = client_with(store.clone(), &mock_server.uri());

    let result = client.profile().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    // No renewal was attempted, so nothing was cleared here.
    assert_eq!(store.access_token().as_deref(), Some("A1"));
}

#[tokio::test]
async fn renewal_attempted_at_most_once_per_request() {
    let mock_server = MockServer::start().await;

    // The server rejects the access token even after a successful renewal.
    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair {
        access: "A1".into(),
        refresh: "R1".into(),
    }));
    let client = client_with(store, &mock_server.uri());

    let result = client.profile().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn logout_posts_refresh_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout/"))
        .and(body_json(json!({"refresh": "R1"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair {
        access: "A1".into(),
        refresh: "R1".into(),
    }));
    let client = client_with(store, &mock_server.uri());

    client.logout("R1").await.unwrap();
}

#[tokio::test]
async fn server_error_maps_by_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_with(Arc::new(MemoryTokenStore::new()), &mock_server.uri());
    let result = client.profile().await;
    assert!(matches!(
        result,
        Err(ClientError::ServerError { status: 500, .. })
    ));
}
