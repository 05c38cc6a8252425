use crate::common;
use client::api::{auth, projects};
use client::{KeyValueStore, Session};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_bearer_token_attached_when_signed_in() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("GET", "/projects/statistics", 200, json!({ "total": 3 }));

    projects::statistics(&ctx.client).await.unwrap();

    let calls = ctx.api.calls("GET", "/projects/statistics");
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer test-token"));
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let ctx = common::test_app().await;
    ctx.api.respond("GET", "/projects/statistics", 200, json!({ "total": 0 }));

    projects::statistics(&ctx.client).await.unwrap();

    let calls = ctx.api.calls("GET", "/projects/statistics");
    assert_eq!(calls[0].authorization, None);
}

#[tokio::test]
async fn test_token_is_read_per_request() {
    let ctx = common::test_app().await;
    ctx.api.respond(
        "POST",
        "/auth/login",
        200,
        json!({ "access_token": "fresh", "user": { "id": "7", "name": "Ada", "role": "user" } }),
    );
    ctx.api.respond("GET", "/users/me", 200, json!({ "id": "7", "name": "Ada" }));

    auth::login(&ctx.client, "ada@example.com", "pw").await.unwrap();
    auth::profile(&ctx.client).await.unwrap();
    Session::clear(ctx.store.as_ref());
    auth::profile(&ctx.client).await.unwrap();

    let calls = ctx.api.calls("GET", "/users/me");
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer fresh"));
    assert_eq!(calls[1].authorization, None);
}

#[tokio::test]
async fn test_profile_unwraps_data_envelope() {
    let ctx = common::test_app_with_store(common::signed_in_store("user")).await;
    ctx.api.respond(
        "GET",
        "/users/me",
        200,
        json!({ "data": { "_id": "65f0", "name": "Test User", "email": "t@example.com", "role": "user" } }),
    );

    let profile = auth::profile(&ctx.client).await.unwrap();

    assert_eq!(profile.id(), "65f0");
    assert_eq!(profile.email, "t@example.com");
    assert_eq!(ctx.store.get("token").as_deref(), Some("test-token"));
}
