//! Login and registration endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use userauth::backend::auth::{AuthResponse, UserStore};

use crate::common::{assert_error, test_tokens, TestApp};

#[tokio::test]
async fn test_register_returns_identity_and_token() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/user/register")
        .json(&json!({"email": "a@x.com", "password": "pw123", "name": "Ann"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    let fields: Vec<&str> = {
        let mut keys: Vec<&str> = body
            .as_object()
            .expect("object body")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    };
    assert_eq!(fields, vec!["email", "id", "name", "token"]);
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["name"], "Ann");

    let auth = response.json::<AuthResponse>();
    let claims = test_tokens().verify(&auth.token).expect("token verifies");
    assert_eq!(claims.user_id().expect("uuid subject"), auth.user.id);
}

#[tokio::test]
async fn test_register_stores_hash_not_password() {
    let app = TestApp::new();
    app.register("a@x.com", "pw123", "Ann").await;

    let user = app
        .store
        .find_user_by_email("a@x.com")
        .await
        .expect("store read")
        .expect("user stored");
    assert_ne!(user.password_hash, "pw123");
    assert!(user.password_hash.starts_with("$2"));
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();

    for body in [
        json!({"email": "a@x.com", "password": "pw123"}),
        json!({"email": "", "password": "pw123", "name": "Ann"}),
        json!({"email": "a@x.com", "password": "", "name": "Ann"}),
        json!({}),
    ] {
        let response = app.server.post("/api/user/register").json(&body).await;
        assert_error(
            &response,
            StatusCode::BAD_REQUEST,
            "Please fill in the required fields",
        );
    }

    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.register("a@x.com", "pw123", "Ann").await;

    let response = app
        .server
        .post("/api/user/register")
        .json(&json!({"email": "a@x.com", "password": "other", "name": "Anne"}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "This email is already used");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_email_comparison_is_exact() {
    let app = TestApp::new();
    app.register("a@x.com", "pw123", "Ann").await;
    app.register("A@x.com", "pw123", "Ann").await;

    assert_eq!(app.store.len().await, 2);
}

#[tokio::test]
async fn test_login_after_register() {
    let app = TestApp::new();
    let registered = app.register("a@x.com", "pw123", "Ann").await;

    let response = app
        .server
        .post("/api/user/login")
        .json(&json!({"email": "a@x.com", "password": "pw123"}))
        .await;

    response.assert_status_ok();
    let login = response.json::<AuthResponse>();
    assert_eq!(login.user, registered.user);
    assert_ne!(login.token, registered.token);

    let claims = test_tokens().verify(&login.token).expect("token verifies");
    assert_eq!(claims.user_id().expect("uuid subject"), registered.user.id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.register("a@x.com", "pw123", "Ann").await;

    let response = app
        .server
        .post("/api/user/login")
        .json(&json!({"email": "a@x.com", "password": "wrong"}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Invalid login or password");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::new();
    app.register("a@x.com", "pw123", "Ann").await;

    let unknown = app
        .server
        .post("/api/user/login")
        .json(&json!({"email": "nobody@x.com", "password": "pw123"}))
        .await;
    let wrong = app
        .server
        .post("/api/user/login")
        .json(&json!({"email": "a@x.com", "password": "nope"}))
        .await;

    assert_error(&unknown, StatusCode::BAD_REQUEST, "Invalid login or password");
    assert_eq!(unknown.text(), wrong.text());
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new();

    for body in [
        json!({"email": "a@x.com"}),
        json!({"password": "pw123"}),
        json!({"email": "", "password": ""}),
    ] {
        let response = app.server.post("/api/user/login").json(&body).await;
        assert_error(
            &response,
            StatusCode::BAD_REQUEST,
            "Please fill in the required fields",
        );
    }
}

#[tokio::test]
async fn test_password_over_bcrypt_limit() {
    let app = TestApp::new();
    let prefix = "a".repeat(72);
    app.register("a@x.com", &prefix, "Ann").await;

    let register = app
        .server
        .post("/api/user/register")
        .json(&json!({"email": "b@x.com", "password": format!("{prefix}X"), "name": "Bob"}))
        .await;
    assert_error(
        &register,
        StatusCode::BAD_REQUEST,
        "Please fill in the required fields",
    );

    let login = app
        .server
        .post("/api/user/login")
        .json(&json!({"email": "a@x.com", "password": format!("{prefix}Y")}))
        .await;
    assert_error(&login, StatusCode::BAD_REQUEST, "Invalid login or password");
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/user/login")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_error(
        &response,
        StatusCode::BAD_REQUEST,
        "Please fill in the required fields",
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app.server.get("/api/user/unknown").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Not found");
}
