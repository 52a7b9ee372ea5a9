use contracts::domain::common::MasterPayload;
use contracts::domain::department::{Department, DepartmentId};
use contracts::shared::api::ApiMessage;

use crate::shared::api_client::ApiClient;

pub async fn list(api: ApiClient) -> Result<Vec<Department>, String> {
    api.get("/api/departments").await
}

pub async fn create(api: ApiClient, payload: &MasterPayload) -> Result<Department, String> {
    api.post("/api/departments", payload).await
}

pub async fn update(
    api: ApiClient,
    id: DepartmentId,
    payload: &MasterPayload,
) -> Result<Department, String> {
    api.put(&format!("/api/departments/{}", id), payload).await
}

/// Masters are hard-deleted.
pub async fn delete(api: ApiClient, id: DepartmentId) -> Result<ApiMessage, String> {
    api.delete(&format!("/api/departments/{}", id)).await
}
