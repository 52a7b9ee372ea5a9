use contracts::domain::common::MasterPayload;
use contracts::domain::designation::{Designation, DesignationId};
use contracts::shared::api::ApiMessage;

use crate::shared::api_client::ApiClient;

pub async fn list(api: ApiClient) -> Result<Vec<Designation>, String> {
    api.get("/api/designations").await
}

pub async fn create(api: ApiClient, payload: &MasterPayload) -> Result<Designation, String> {
    api.post("/api/designations", payload).await
}

pub async fn update(
    api: ApiClient,
    id: DesignationId,
    payload: &MasterPayload,
) -> Result<Designation, String> {
    api.put(&format!("/api/designations/{}", id), payload).await
}

pub async fn delete(api: ApiClient, id: DesignationId) -> Result<ApiMessage, String> {
    api.delete(&format!("/api/designations/{}", id)).await
}
