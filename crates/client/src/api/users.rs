use super::segment;
use crate::http::ApiClient;
use shared_types::{
    count_records, normalize, AppError, Collection, CreateUserRequest, ListResponse,
    UpdateUserRequest, UserRecord,
};

#[tracing::instrument(skip(client))]
pub async fn list_users(
    client: &ApiClient,
    page: u32,
    limit: u32,
) -> Result<ListResponse<UserRecord>, AppError> {
    let payload = client
        .get(
            "/users",
            &[("page", page.to_string()), ("limit", limit.to_string())],
        )
        .await?;
    Ok(normalize(&payload, Collection::USERS, page, limit))
}

/// Total number of user accounts, read from the first page of the list.
pub async fn count_users(client: &ApiClient, limit: u32) -> Result<u64, AppError> {
    let payload = client
        .get("/users", &[("page", "1".to_string()), ("limit", limit.to_string())])
        .await?;
    Ok(count_records(&payload, Collection::USERS))
}

#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn create_user(client: &ApiClient, request: &CreateUserRequest) -> Result<(), AppError> {
    client.post_json("/users", request).await?;
    Ok(())
}

#[tracing::instrument(skip(client, request))]
pub async fn update_user(
    client: &ApiClient,
    id: &str,
    request: &UpdateUserRequest,
) -> Result<(), AppError> {
    client
        .patch_json(&format!("/users/{}", segment(id)), request)
        .await?;
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn delete_user(client: &ApiClient, id: &str) -> Result<(), AppError> {
    client.delete(&format!("/users/{}", segment(id))).await?;
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn toggle_user_status(client: &ApiClient, id: &str) -> Result<(), AppError> {
    client
        .patch(&format!("/users/{}/toggle-status", segment(id)))
        .await?;
    Ok(())
}

/// Candidates for project membership: whatever the unparameterized list returns.
pub async fn member_candidates(client: &ApiClient) -> Result<Vec<UserRecord>, AppError> {
    let payload = client.get("/users", &[]).await?;
    let list: ListResponse<UserRecord> = normalize(&payload, Collection::USERS, 1, 0);
    Ok(list.items)
}
