use contracts::domain::project::{Project, ProjectCreated, ProjectId, ProjectPayload};
use contracts::shared::api::{ApiMessage, Items};
use contracts::shared::pagination::{PageQuery, Paginated};

use crate::shared::api_client::ApiClient;

pub async fn list(api: ApiClient, query: PageQuery) -> Result<Paginated<Project>, String> {
    let qs = serde_qs::to_string(&query).map_err(|e| format!("Failed to encode query: {}", e))?;
    api.get(&format!("/api/projects?{}", qs)).await
}

pub async fn get(api: ApiClient, id: ProjectId) -> Result<Project, String> {
    api.get(&format!("/api/projects/{}", id)).await
}

pub async fn create(api: ApiClient, payload: &ProjectPayload) -> Result<ProjectCreated, String> {
    api.post("/api/projects", payload).await
}

pub async fn update(
    api: ApiClient,
    id: ProjectId,
    payload: &ProjectPayload,
) -> Result<ApiMessage, String> {
    api.put(&format!("/api/projects/{}", id), payload).await
}

/// Soft delete: the project is flagged, not erased, and drops out of the
/// admin list.
pub async fn soft_delete(api: ApiClient, id: ProjectId) -> Result<ApiMessage, String> {
    api.delete(&format!("/api/projects/{}", id)).await
}

/// Projects the current user is assigned to.
pub async fn my_projects(api: ApiClient) -> Result<Vec<Project>, String> {
    let body: Items<Project> = api.get("/api/projects/my").await?;
    Ok(body.items)
}
