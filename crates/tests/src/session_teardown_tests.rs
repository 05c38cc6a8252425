use crate::common;
use client::api::{projects, users};
use client::{KeyValueStore, Session};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::AppErrorKind;

#[tokio::test]
async fn test_expired_token_clears_storage() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("GET", "/projects", 401, json!({ "message": "Token expired" }));

    let err = projects::list_projects(&ctx.client, 1, 10, "u-1").await.unwrap_err();

    assert!(err.is_session_expired());
    assert_eq!(err.status_code_u16(), Some(401));
    assert!(ctx.store.is_empty());
}

#[tokio::test]
async fn test_unauthorized_message_clears_storage() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("DELETE", "/users/u-2", 401, json!({ "message": "Unauthorized" }));

    let err = users::delete_user(&ctx.client, "u-2").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::SessionExpired);
    assert!(Session::restore(ctx.store.as_ref()).is_none());
}

#[tokio::test]
async fn test_permission_401_keeps_session() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/users",
        401,
        json!({ "message": "Insufficient permissions" }),
    );

    let err = users::list_users(&ctx.client, 1, 10).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.display_or("Failed to fetch users"), "Insufficient permissions");
    assert_eq!(ctx.store.get("token").as_deref(), Some("test-token"));
    assert!(Session::restore(ctx.store.as_ref()).is_some());
}

#[tokio::test]
async fn test_forbidden_never_clears_session() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "DELETE",
        "/projects/p-1",
        403,
        json!({ "message": "Token lacks the required scope" }),
    );

    let err = projects::delete_project(&ctx.client, "p-1").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(ctx.store.get("token").as_deref(), Some("test-token"));
}

#[tokio::test]
async fn test_bare_401_outside_auth_keeps_session() {
    let ctx = common::test_app_with_store(common::signed_in_store("user")).await;
    ctx.api.respond("GET", "/projects/statistics", 401, serde_json::Value::Null);

    let err = projects::statistics(&ctx.client).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.display_or("Failed to load statistics"), "Failed to load statistics");
    assert!(Session::restore(ctx.store.as_ref()).is_some());
}

#[tokio::test]
async fn test_member_candidates_expired_token_clears_storage() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("GET", "/users", 401, json!({ "message": "jwt expired" }));

    let err = users::member_candidates(&ctx.client).await.unwrap_err();

    assert!(err.is_session_expired());
    assert!(Session::restore(ctx.store.as_ref()).is_none());
}
