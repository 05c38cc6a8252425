use crate::common;
use client::api::users;
use client::ListState;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{CreateUserRequest, UpdateUserRequest, UserRecord};

const FETCH_FALLBACK: &str = "Failed to fetch users. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete user. Please try again.";

fn three_users() -> serde_json::Value {
    json!({
        "users": [
            common::user_json("u-1", "Root", "super-admin"),
            common::user_json("u-2", "Ada", "admin"),
            common::user_json("u-3", "Bo", "user")
        ],
        "pagination": { "currentPage": 1, "totalPages": 1, "totalUsers": 3 }
    })
}

async fn refetch(ctx: &common::TestContext, state: &mut ListState<UserRecord>) {
    let ticket = state.begin_fetch();
    let result = users::list_users(&ctx.client, state.current_page(), 10)
        .await
        .map_err(|e| e.display_or(FETCH_FALLBACK));
    state.finish_fetch(ticket, result);
}

#[tokio::test]
async fn test_failed_delete_shows_server_message_and_refetches() {
    let ctx = common::test_app_with_store(common::signed_in_store("super-admin")).await;
    ctx.api.respond("GET", "/users", 200, three_users());
    ctx.api.respond(
        "DELETE",
        "/users/u-2",
        400,
        json!({ "message": ["Cannot delete last admin"] }),
    );

    let mut state = ListState::<UserRecord>::new();
    refetch(&ctx, &mut state).await;
    assert_eq!(state.items().len(), 3);

    assert!(state.begin_action("u-2"));
    assert!(state.is_busy("u-2"));
    let outcome = users::delete_user(&ctx.client, "u-2")
        .await
        .map_err(|e| e.display_or(DELETE_FALLBACK));
    state.finish_action("u-2", outcome);
    refetch(&ctx, &mut state).await;

    assert_eq!(state.action_error(), Some("Cannot delete last admin"));
    assert_eq!(state.error(), None);
    assert_eq!(state.items().len(), 3);
    assert!(!state.is_busy("u-2"));
    assert_eq!(ctx.api.calls("GET", "/users").len(), 2);
}

#[tokio::test]
async fn test_next_action_clears_previous_banner() {
    let ctx = common::test_app_with_store(common::signed_in_store("super-admin")).await;
    ctx.api.respond("DELETE", "/users/u-3", 204, serde_json::Value::Null);

    let mut state = ListState::<UserRecord>::new();
    state.set_action_error("Cannot delete last admin");

    assert!(state.begin_action("u-3"));
    assert_eq!(state.action_error(), None);
    let outcome = users::delete_user(&ctx.client, "u-3")
        .await
        .map_err(|e| e.display_or(DELETE_FALLBACK));
    state.finish_action("u-3", outcome);

    assert_eq!(state.action_error(), None);
}

#[tokio::test]
async fn test_toggle_status_patches_toggle_path() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("PATCH", "/users/u-3/toggle-status", 200, json!({ "isActive": false }));

    users::toggle_user_status(&ctx.client, "u-3").await.unwrap();

    let calls = ctx.api.calls("PATCH", "/users/u-3/toggle-status");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_user_posts_body() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("POST", "/users", 201, json!({ "id": "u-9" }));

    let request = CreateUserRequest {
        name: "Cy".into(),
        email: "cy@example.com".into(),
        password: "hunter22".into(),
        role: "user".into(),
    };
    users::create_user(&ctx.client, &request).await.unwrap();

    let calls = ctx.api.calls("POST", "/users");
    assert_eq!(
        calls[0].body,
        json!({ "name": "Cy", "email": "cy@example.com", "password": "hunter22", "role": "user" })
    );
}

#[tokio::test]
async fn test_update_user_omits_password() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("PATCH", "/users/u-3", 200, json!({}));

    let request = UpdateUserRequest {
        name: "Bo".into(),
        email: "bo@example.com".into(),
        role: "admin".into(),
    };
    users::update_user(&ctx.client, "u-3", &request).await.unwrap();

    let body = &ctx.api.calls("PATCH", "/users/u-3")[0].body;
    assert_eq!(body["role"], "admin");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_conflict_message_is_surfaced() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("POST", "/users", 409, json!({ "message": "Email already in use" }));

    let request = CreateUserRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "hunter22".into(),
        role: "admin".into(),
    };
    let err = users::create_user(&ctx.client, &request).await.unwrap_err();

    assert_eq!(
        err.display_or("Failed to create user. Please try again."),
        "Email already in use"
    );
}
