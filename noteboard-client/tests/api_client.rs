//! Integration tests for the API client against a mock server
//!
//! These verify the request side (bearer attachment, wire shapes) and the
//! response side (success decoding, error body parsing, expiry
//! classification) without a real backend.

use httpmock::prelude::*;
use noteboard_client::users::LoginRequest;
use noteboard_client::{ApiClient, ClientError, MemorySessionStore, SessionStore};
use noteboard_shared::models::Session;
use serde_json::json;
use std::sync::Arc;

fn client_with_session(server: &MockServer, session: Option<Session>) -> ApiClient {
    let store = Arc::new(MemorySessionStore::new());
    if let Some(session) = session {
        store.save(&session).unwrap();
    }
    ApiClient::new(server.base_url(), store)
}

#[tokio::test]
async fn attaches_bearer_token_when_session_exists() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/user/getUsers")
                .header("authorization", "Bearer tok-123");
            then.status(200).json_body(json!({ "users": [] }));
        })
        .await;

    let client = client_with_session(&server, Some(Session::new("tok-123", "user-1")));
    let response = client.get_users().await.unwrap();

    mock.assert_async().await;
    assert!(response.users.is_empty());
}

#[tokio::test]
async fn sends_no_auth_header_without_session() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user/getUsers").matches(|req| {
                req.headers
                    .as_ref()
                    .map(|headers| {
                        headers
                            .iter()
                            .all(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
                    })
                    .unwrap_or(true)
            });
            then.status(200).json_body(json!({ "users": [] }));
        })
        .await;

    let client = client_with_session(&server, None);
    client.get_users().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn login_decodes_session_parts() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/user/login")
                .json_body(json!({ "email": "ada@example.com", "password": "hunter22" }));
            then.status(200)
                .json_body(json!({ "token": "tok-123", "userId": "user-1" }));
        })
        .await;

    let client = client_with_session(&server, None);
    let response = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "tok-123");
    assert_eq!(response.user_id, "user-1");
}

#[tokio::test]
async fn error_body_with_validation_details_is_parsed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/user/login");
            then.status(422).json_body(json!({
                "message": "Validation failed.",
                "data": [
                    { "type": "field", "value": "nope", "msg": "Invalid email", "path": "email" }
                ]
            }));
        })
        .await;

    let client = client_with_session(&server, None);
    let err = client
        .login(&LoginRequest {
            email: "nope".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body.message, "Validation failed.");
            assert_eq!(body.data.len(), 1);
            assert_eq!(body.data[0].path.as_deref(), Some("email"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn jwt_expired_500_classifies_as_session_expired() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user/getUsers");
            then.status(500).json_body(json!({ "message": "jwt expired" }));
        })
        .await;

    let client = client_with_session(&server, Some(Session::new("stale", "user-1")));
    let err = client.get_users().await.unwrap_err();

    assert!(err.is_session_expired());
}

#[tokio::test]
async fn not_authenticated_401_classifies_as_session_expired() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user/getUsers");
            then.status(401)
                .json_body(json!({ "message": "Not authenticated." }));
        })
        .await;

    let client = client_with_session(&server, Some(Session::new("stale", "user-1")));
    let err = client.get_users().await.unwrap_err();

    assert!(err.is_session_expired());
}

#[tokio::test]
async fn other_401_messages_are_ordinary_api_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/user/login");
            then.status(401)
                .json_body(json!({ "message": "Wrong password." }));
        })
        .await;

    let client = client_with_session(&server, None);
    let err = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(!err.is_session_expired());
    assert_eq!(err.body().unwrap().message, "Wrong password.");
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_raw_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user/getUsers");
            then.status(502).body("Bad Gateway");
        })
        .await;

    let client = client_with_session(&server, None);
    let err = client.get_users().await.unwrap_err();

    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body.message, "Bad Gateway");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
