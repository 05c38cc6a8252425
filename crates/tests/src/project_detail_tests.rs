use crate::common;
use client::api::{projects, users};
use client::DetailState;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::Project;

const ADD_FALLBACK: &str = "Failed to add team member";
const DETAIL_FALLBACK: &str = "Failed to load project details";

fn detail_with_team(members: serde_json::Value) -> serde_json::Value {
    json!({
        "data": {
            "id": "p-1",
            "name": "Apollo",
            "status": "planning",
            "priority": "medium",
            "teamMembers": members
        }
    })
}

#[tokio::test]
async fn test_get_project_unwraps_data() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/projects/p-1",
        200,
        detail_with_team(json!([{ "userId": "u-2", "userName": "Bo", "userEmail": "bo@example.com" }])),
    );

    let project = projects::get_project(&ctx.client, "p-1").await.unwrap();

    assert_eq!(project.name, "Apollo");
    assert_eq!(project.team().len(), 1);
    assert_eq!(project.team()[0].display_name(), "Bo");
    assert!(project.has_member("u-2"));
}

#[tokio::test]
async fn test_missing_project_reports_server_message() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("GET", "/projects/p-9", 404, json!({ "message": "Project not found" }));

    let err = projects::get_project(&ctx.client, "p-9").await.unwrap_err();

    assert_eq!(err.display_or(DETAIL_FALLBACK), "Project not found");
}

#[tokio::test]
async fn test_add_member_then_refetch() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("GET", "/projects/p-1", 200, detail_with_team(json!([])));
    ctx.api.respond("POST", "/projects/p-1/members/u-2", 201, serde_json::Value::Null);

    let mut state = DetailState::<Project>::new();
    let ticket = state.begin_fetch();
    let loaded = projects::get_project(&ctx.client, "p-1")
        .await
        .map(Some)
        .map_err(|e| e.display_or(DETAIL_FALLBACK));
    state.finish_fetch(ticket, loaded);
    assert!(!state.record().unwrap().has_member("u-2"));

    assert!(state.begin_action("add:u-2"));
    assert!(!state.begin_action("add:u-2"));
    let outcome = projects::add_member(&ctx.client, "p-1", "u-2")
        .await
        .map_err(|e| e.display_or(ADD_FALLBACK));
    state.finish_action("add:u-2", outcome);

    ctx.api.respond(
        "GET",
        "/projects/p-1",
        200,
        detail_with_team(json!([{ "id": "u-2", "name": "Bo" }])),
    );
    let ticket = state.begin_fetch();
    let reloaded = projects::get_project(&ctx.client, "p-1")
        .await
        .map(Some)
        .map_err(|e| e.display_or(DETAIL_FALLBACK));
    state.finish_fetch(ticket, reloaded);

    assert_eq!(state.action_error(), None);
    assert!(!state.any_busy());
    assert!(state.record().unwrap().has_member("u-2"));
    assert_eq!(ctx.api.calls("POST", "/projects/p-1/members/u-2").len(), 1);
    assert_eq!(ctx.api.calls("GET", "/projects/p-1").len(), 2);
}

#[tokio::test]
async fn test_add_member_failure_uses_fallback() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("POST", "/projects/p-1/members/u-2", 500, json!({}));

    let mut state = DetailState::<Project>::new();
    state.begin_action("add:u-2");
    let outcome = projects::add_member(&ctx.client, "p-1", "u-2")
        .await
        .map_err(|e| e.display_or(ADD_FALLBACK));
    state.finish_action("add:u-2", outcome);

    assert_eq!(state.action_error(), Some(ADD_FALLBACK));
    assert!(!state.is_busy("add:u-2"));
}

#[tokio::test]
async fn test_remove_member_hits_member_path() {
    let ctx = common::test_app_with_store(common::signed_in_store("super-admin")).await;
    ctx.api.respond("DELETE", "/projects/p-1/members/u-2", 204, serde_json::Value::Null);

    projects::remove_member(&ctx.client, "p-1", "u-2").await.unwrap();

    let calls = ctx.api.calls("DELETE", "/projects/p-1/members/u-2");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer test-token"));
}

#[tokio::test]
async fn test_member_candidates_requests_unparameterized_list() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/users",
        200,
        json!({ "users": [common::user_json("u-2", "Bo", "user"), common::user_json("u-3", "Cy", "admin")] }),
    );

    let candidates = users::member_candidates(&ctx.client).await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(ctx.api.calls("GET", "/users")[0].query, "");
}
