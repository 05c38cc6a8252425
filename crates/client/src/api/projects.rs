use super::{decode, segment, unwrap_data};
use crate::http::ApiClient;
use shared_types::{
    normalize, AppError, Collection, ListResponse, Project, ProjectRequest, ProjectStatistics,
};

#[tracing::instrument(skip(client))]
pub async fn list_projects(
    client: &ApiClient,
    page: u32,
    limit: u32,
    user_id: &str,
) -> Result<ListResponse<Project>, AppError> {
    let payload = client
        .get(
            "/projects",
            &[
                ("page", page.to_string()),
                ("limit", limit.to_string()),
                ("userId", user_id.to_string()),
            ],
        )
        .await?;
    Ok(normalize(&payload, Collection::PROJECTS, page, limit))
}

pub async fn statistics(client: &ApiClient) -> Result<ProjectStatistics, AppError> {
    let payload = client.get("/projects/statistics", &[]).await?;
    decode(unwrap_data(payload))
}

#[tracing::instrument(skip(client))]
pub async fn get_project(client: &ApiClient, id: &str) -> Result<Project, AppError> {
    let payload = client
        .get(&format!("/projects/{}", segment(id)), &[])
        .await?;
    decode(unwrap_data(payload))
}

#[tracing::instrument(skip(client, request), fields(name = %request.name))]
pub async fn create_project(client: &ApiClient, request: &ProjectRequest) -> Result<(), AppError> {
    client.post_json("/projects", request).await?;
    Ok(())
}

#[tracing::instrument(skip(client, request))]
pub async fn update_project(
    client: &ApiClient,
    id: &str,
    request: &ProjectRequest,
) -> Result<(), AppError> {
    client
        .patch_json(&format!("/projects/{}", segment(id)), request)
        .await?;
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn delete_project(client: &ApiClient, id: &str) -> Result<(), AppError> {
    client.delete(&format!("/projects/{}", segment(id))).await?;
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn add_member(client: &ApiClient, project_id: &str, user_id: &str) -> Result<(), AppError> {
    client
        .post(&format!(
            "/projects/{}/members/{}",
            segment(project_id),
            segment(user_id)
        ))
        .await?;
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn remove_member(
    client: &ApiClient,
    project_id: &str,
    member_id: &str,
) -> Result<(), AppError> {
    client
        .delete(&format!(
            "/projects/{}/members/{}",
            segment(project_id),
            segment(member_id)
        ))
        .await?;
    Ok(())
}
