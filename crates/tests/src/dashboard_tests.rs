use crate::common;
use client::api::{projects, users};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ProjectPriority, ProjectStatus};

#[tokio::test]
async fn test_statistics_missing_fields_read_as_zero() {
    let ctx = common::test_app_with_store(common::signed_in_store("user")).await;
    ctx.api.respond(
        "GET",
        "/projects/statistics",
        200,
        json!({ "data": { "total": 7, "byStatus": { "planning": 2, "in_progress": 5 } } }),
    );

    let stats = projects::statistics(&ctx.client).await.unwrap();

    assert_eq!(stats.total, 7);
    assert_eq!(stats.by_status.count(ProjectStatus::Planning), 2);
    assert_eq!(stats.by_status.count(ProjectStatus::InProgress), 5);
    assert_eq!(stats.by_status.count(ProjectStatus::Cancelled), 0);
    assert_eq!(stats.by_priority.count(ProjectPriority::High), 0);
}

#[tokio::test]
async fn test_count_users_reads_collection_total() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond(
        "GET",
        "/users",
        200,
        json!({
            "users": [common::user_json("u-1", "Ada", "admin")],
            "pagination": { "totalUsers": 42 }
        }),
    );

    assert_eq!(users::count_users(&ctx.client, 1).await.unwrap(), 42);
    let calls = ctx.api.calls("GET", "/users");
    assert_eq!(calls[0].query_param("page").as_deref(), Some("1"));
    assert_eq!(calls[0].query_param("limit").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_count_users_falls_back_to_top_level_total() {
    let ctx = common::test_app_with_store(common::signed_in_store("admin")).await;
    ctx.api.respond("GET", "/users", 200, json!({ "total": 17 }));

    assert_eq!(users::count_users(&ctx.client, 1).await.unwrap(), 17);
}

#[tokio::test]
async fn test_count_users_forbidden_is_an_error() {
    let ctx = common::test_app_with_store(common::signed_in_store("user")).await;
    ctx.api.respond("GET", "/users", 403, json!({ "message": "Forbidden" }));

    let count = users::count_users(&ctx.client, 1).await.unwrap_or(0);

    assert_eq!(count, 0);
    assert_eq!(ctx.api.calls("GET", "/users").len(), 1);
}
