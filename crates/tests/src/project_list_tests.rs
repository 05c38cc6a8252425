use crate::common;
use client::api::projects;
use client::{ListState, Phase};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::Project;

const FETCH_FALLBACK: &str = "Failed to fetch projects. Please try again.";

#[tokio::test]
async fn test_list_projects_sends_scope_params() {
    let ctx = common::test_app_with_store(common::signed_in_store("user")).await;
    ctx.api.respond("GET", "/projects", 200, json!([]));

    projects::list_projects(&ctx.client, 3, 10, "u-1").await.unwrap();

    let calls = ctx.api.calls("GET", "/projects");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query_param("page").as_deref(), Some("3"));
    assert_eq!(calls[0].query_param("limit").as_deref(), Some("10"));
    assert_eq!(calls[0].query_param("userId").as_deref(), Some("u-1"));
}

#[tokio::test]
async fn test_list_projects_reads_keyed_pagination() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/projects",
        200,
        json!({
            "projects": [common::project_json("p-11", "Apollo"), common::project_json("p-12", "Borealis")],
            "pagination": { "currentPage": 2, "totalPages": 2, "totalProjects": 12, "limit": 10 }
        }),
    );

    let list = projects::list_projects(&ctx.client, 2, 10, "u-1").await.unwrap();

    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].name, "Apollo");
    assert_eq!(list.items[0].owner_name(), Some("Owner One"));
    assert_eq!(list.pagination.current_page, 2);
    assert_eq!(list.pagination.total_pages, 2);
    assert_eq!(list.pagination.total_count, 12);
    assert!(list.pagination.has_prev());
    assert!(!list.pagination.has_next());
}

#[tokio::test]
async fn test_list_projects_accepts_data_envelope() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/projects",
        200,
        json!({
            "data": [{ "_id": 5, "title": "Legacy" }],
            "meta": { "total": 25, "page": 1 }
        }),
    );

    let list = projects::list_projects(&ctx.client, 1, 10, "u-1").await.unwrap();

    assert_eq!(list.items[0].id(), "5");
    assert_eq!(list.items[0].name, "Legacy");
    assert_eq!(list.pagination.total_count, 25);
    assert_eq!(list.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_list_projects_skips_malformed_records() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/projects",
        200,
        json!({ "projects": [common::project_json("p-1", "Kept"), { "name": "No id" }] }),
    );

    let list = projects::list_projects(&ctx.client, 1, 10, "u-1").await.unwrap();

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].id(), "p-1");
}

#[tokio::test]
async fn test_superseded_fetch_is_dropped() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/projects",
        200,
        json!({ "projects": [common::project_json("p-1", "Apollo")] }),
    );

    let mut state = ListState::<Project>::new();
    let stale = state.begin_fetch();
    let fresh = state.begin_fetch();

    let result = projects::list_projects(&ctx.client, 1, 10, "u-1")
        .await
        .map_err(|e| e.display_or(FETCH_FALLBACK));
    assert!(state.finish_fetch(fresh, result));
    assert!(!state.finish_fetch(stale, Err("late failure".into())));

    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.error(), None);
    assert_eq!(state.items().len(), 1);
}

#[tokio::test]
async fn test_fetch_failure_shows_fallback_and_keeps_rows() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/projects",
        200,
        json!([common::project_json("p-1", "Apollo")]),
    );

    let mut state = ListState::<Project>::new();
    let ticket = state.begin_fetch();
    let first = projects::list_projects(&ctx.client, 1, 10, "u-1")
        .await
        .map_err(|e| e.display_or(FETCH_FALLBACK));
    state.finish_fetch(ticket, first);

    ctx.api.respond("GET", "/projects", 500, serde_json::Value::Null);
    let ticket = state.begin_fetch();
    let second = projects::list_projects(&ctx.client, 1, 10, "u-1")
        .await
        .map_err(|e| e.display_or(FETCH_FALLBACK));
    state.finish_fetch(ticket, second);

    assert_eq!(state.phase(), Phase::Error);
    assert_eq!(state.error(), Some(FETCH_FALLBACK));
    assert_eq!(state.items().len(), 1);
}
