mod support;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::Value;
use support::{FakeApi, closed_port_url, credential};
use vola_api::{ApiClient, ApiError};
use vola_auth::TokenStore;
use vola_core::entities::LoginRequest;

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "admin@example.org".into(),
        password: "hunter22".into(),
    }
}

#[tokio::test]
async fn login_persists_returned_credential() {
    let token = credential("admin");
    let body = format!(
        r#"{{"data":{{"id":"u-1","email":"admin@example.org","role":"admin","token":"{token}"}}}}"#
    );
    let api = FakeApi::serve(vec![(200, &body)]);
    let store = Arc::new(TokenStore::in_memory());
    let client = ApiClient::new(&api.base_url, Arc::clone(&store));

    let profile = client.login(&login_request()).await.unwrap();

    assert_eq!(profile.email, "admin@example.org");
    assert_eq!(store.get(), Some(token));
    let cookie = store.cookie().unwrap();
    assert_eq!(cookie.name, "token");
    assert!(cookie.secure);

    let requests = api.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/auth/login");
    let sent: Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(sent["email"], "admin@example.org");
}

#[tokio::test]
async fn ttl_comes_from_client_settings() {
    let api = FakeApi::serve(vec![(200, r#"{"data":{"token":"a.b.c"}}"#)]);
    let store = Arc::new(TokenStore::in_memory());
    let client = ApiClient::new(&api.base_url, Arc::clone(&store)).with_ttl_days(1);

    let _: Value = client.submit("/auth/register", &serde_json::json!({})).await.unwrap();

    let cookie = store.cookie().unwrap();
    let remaining = cookie.expires_at - chrono::Utc::now();
    assert!((23..=24).contains(&remaining.num_hours()));
    api.finish();
}

#[tokio::test]
async fn success_without_token_leaves_store_untouched() {
    let api = FakeApi::serve(vec![(201, r#"{"data":{"id":"x"}}"#)]);
    let store = Arc::new(TokenStore::in_memory());
    let client = ApiClient::new(&api.base_url, Arc::clone(&store));

    let data: Value = client.submit("/auth/register", &serde_json::json!({})).await.unwrap();

    assert_eq!(data["id"], "x");
    assert_eq!(store.get(), None);
    api.finish();
}

#[tokio::test]
async fn failure_messages_follow_priority() {
    let api = FakeApi::serve(vec![
        (400, r#"{"errors":[{"message":"bad email"}]}"#),
        (401, r#"{"error":"X"}"#),
        (500, r#"{"unexpected":true}"#),
        (503, "<html>gateway</html>"),
    ]);
    let client = ApiClient::new(&api.base_url, Arc::new(TokenStore::in_memory()));
    let body = login_request();

    let mut messages = Vec::new();
    for _ in 0..4 {
        let err = client.submit::<Value, _>("/auth/login", &body).await.unwrap_err();
        messages.push((err.status(), err.message()));
    }

    assert_eq!(
        messages,
        vec![
            (Some(400), "bad email".to_string()),
            (Some(401), "X".to_string()),
            (Some(500), "API error: 500".to_string()),
            (Some(503), "API error: 503".to_string()),
        ]
    );
    api.finish();
}

#[tokio::test]
async fn failed_submission_keeps_every_field_error() {
    let api = FakeApi::serve(vec![(
        400,
        r#"{"errors":[{"field":"email","message":"is taken"},{"field":"age","message":"must be positive"}]}"#,
    )]);
    let client = ApiClient::new(&api.base_url, Arc::new(TokenStore::in_memory()));

    let err = client.submit::<Value, _>("/auth/register", &serde_json::json!({})).await.unwrap_err();

    assert_eq!(err.message(), "is taken");
    assert_eq!(
        err.field_messages(),
        vec!["email: is taken".to_string(), "age: must be positive".to_string()]
    );
    api.finish();
}

#[tokio::test]
async fn failed_login_does_not_touch_existing_session() {
    let api = FakeApi::serve(vec![(401, r#"{"message":"Invalid credentials"}"#)]);
    let store = Arc::new(TokenStore::in_memory());
    store.set("old.session.token", 7).unwrap();
    let client = ApiClient::new(&api.base_url, Arc::clone(&store));

    let err = client.login(&login_request()).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(store.get().as_deref(), Some("old.session.token"));
    api.finish();
}

#[tokio::test]
async fn success_status_with_envelope_errors_is_a_failure() {
    let api = FakeApi::serve(vec![(200, r#"{"errors":"Email already registered"}"#)]);
    let store = Arc::new(TokenStore::in_memory());
    let client = ApiClient::new(&api.base_url, Arc::clone(&store));

    let err = client.submit::<Value, _>("/auth/register", &serde_json::json!({})).await.unwrap_err();

    assert!(matches!(err, ApiError::Envelope { .. }));
    assert_eq!(err.message(), "Email already registered");
    assert_eq!(store.get(), None);
    api.finish();
}

#[tokio::test]
async fn returned_data_wins_over_envelope_errors() {
    let api = FakeApi::serve(vec![(200, r#"{"data":{"token":"a.b.c"},"errors":["stale warning"]}"#)]);
    let store = Arc::new(TokenStore::in_memory());
    let client = ApiClient::new(&api.base_url, Arc::clone(&store));

    let data: Value = client.submit("/auth/login", &login_request()).await.unwrap();

    assert_eq!(data["token"], "a.b.c");
    assert_eq!(store.get().as_deref(), Some("a.b.c"));
    api.finish();
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let api = FakeApi::serve(vec![(200, "OK")]);
    let client = ApiClient::new(&api.base_url, Arc::new(TokenStore::in_memory()));

    let err = client.submit::<Value, _>("/auth/login", &login_request()).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    api.finish();
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let client = ApiClient::new(closed_port_url(), Arc::new(TokenStore::in_memory()));

    let err = client.login(&login_request()).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn missing_base_url_fails_before_any_request() {
    let client = ApiClient::new("", Arc::new(TokenStore::in_memory()));
    let err = client.login(&login_request()).await.unwrap_err();
    assert_eq!(err.to_string(), "Base URL not found");
}
