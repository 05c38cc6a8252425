use crate::common;
use client::api::auth;
use client::{KeyValueStore, Session};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Role};

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

#[tokio::test]
async fn test_login_persists_session() {
    let ctx = common::test_app().await;
    ctx.api.respond(
        "POST",
        "/auth/login",
        200,
        json!({
            "access_token": "jwt-abc",
            "user": { "id": 42, "name": "Ada Admin", "role": "admin" }
        }),
    );

    let session = auth::login(&ctx.client, "ada@example.com", "secret").await.unwrap();

    assert_eq!(session.user_id, "42");
    assert_eq!(session.user_name, "Ada Admin");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(ctx.store.get("token").as_deref(), Some("jwt-abc"));
    assert_eq!(ctx.store.get("role").as_deref(), Some("admin"));
    assert_eq!(ctx.store.get("user").as_deref(), Some("Ada Admin"));
    assert_eq!(ctx.store.get("userId").as_deref(), Some("42"));
    assert_eq!(Session::restore(ctx.store.as_ref()), Some(session));
}

#[tokio::test]
async fn test_login_trims_email() {
    let ctx = common::test_app().await;
    ctx.api.respond(
        "POST",
        "/auth/login",
        200,
        json!({
            "access_token": "jwt-abc",
            "user": { "id": "u-9", "name": "Bo", "role": "user" }
        }),
    );

    auth::login(&ctx.client, "  bo@example.com ", "pw").await.unwrap();

    let calls = ctx.api.calls("POST", "/auth/login");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body["email"], "bo@example.com");
    assert_eq!(calls[0].body["password"], "pw");
    assert_eq!(calls[0].authorization, None);
}

#[tokio::test]
async fn test_login_error_joins_message_list() {
    let ctx = common::test_app().await;
    ctx.api.respond(
        "POST",
        "/auth/login",
        400,
        json!({ "message": ["email must be an email", "password is too short"] }),
    );

    let err = auth::login(&ctx.client, "nope", "x").await.unwrap_err();

    assert_eq!(
        err.display_or(LOGIN_FALLBACK),
        "email must be an email, password is too short"
    );
    assert!(ctx.store.get("token").is_none());
}

#[tokio::test]
async fn test_login_401_clears_storage_and_shows_message() {
    let ctx = common::test_app().await;
    ctx.api.respond(
        "POST",
        "/auth/login",
        401,
        json!({ "message": "Invalid credentials" }),
    );

    let err = auth::login(&ctx.client, "ada@example.com", "wrong").await.unwrap_err();

    // Any 401 from the auth endpoints tears down local state.
    assert_eq!(err.kind, AppErrorKind::SessionExpired);
    assert_eq!(err.display_or(LOGIN_FALLBACK), "Invalid credentials");
    assert!(ctx.store.is_empty());
}

#[tokio::test]
async fn test_login_empty_error_body_uses_fallback() {
    let ctx = common::test_app().await;
    ctx.api.respond("POST", "/auth/login", 500, serde_json::Value::Null);

    let err = auth::login(&ctx.client, "ada@example.com", "pw").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.display_or(LOGIN_FALLBACK), LOGIN_FALLBACK);
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let ctx = common::test_app().await;
    ctx.api.respond(
        "POST",
        "/auth/login",
        200,
        json!({ "access_token": "", "user": { "id": "1", "name": "Ada", "role": "admin" } }),
    );

    let err = auth::login(&ctx.client, "ada@example.com", "pw").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::DecodeError);
    assert_eq!(err.display_or(LOGIN_FALLBACK), LOGIN_FALLBACK);
    assert!(ctx.store.get("token").is_none());
}

#[tokio::test]
async fn test_logout_clears_session_even_when_server_fails() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("POST", "/auth/logout", 500, json!({ "message": "boom" }));

    auth::logout(&ctx.client).await;

    assert_eq!(ctx.api.calls("POST", "/auth/logout").len(), 1);
    assert!(Session::restore(ctx.store.as_ref()).is_none());
    assert!(ctx.store.get("token").is_none());
}

#[tokio::test]
async fn test_login_accepts_user_with_both_id_keys() {
    let ctx = common::test_app().await;
    ctx.api.respond(
        "POST",
        "/auth/login",
        200,
        json!({
            "access_token": "jwt-abc",
            "user": { "_id": "65f0", "id": "65f0", "name": "Ada", "role": "user" }
        }),
    );

    let session = auth::login(&ctx.client, "ada@example.com", "secret").await.unwrap();

    assert_eq!(session.user_id, "65f0");
    assert_eq!(ctx.store.get("userId").as_deref(), Some("65f0"));
}
