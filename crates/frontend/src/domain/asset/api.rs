use contracts::domain::asset::{
    AllocateAssetPayload, Asset, AssetAllocation, AssetId, AssetPayload, AssetQuery,
    ReturnAssetPayload,
};
use contracts::shared::api::{ApiMessage, Items};
use contracts::shared::pagination::Paginated;

use crate::shared::api_client::ApiClient;

pub async fn list(api: ApiClient, query: &AssetQuery) -> Result<Paginated<Asset>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    api.get(&format!("/api/assets?{}", qs)).await
}

pub async fn create(api: ApiClient, payload: &AssetPayload) -> Result<Asset, String> {
    api.post("/api/assets", payload).await
}

pub async fn update(api: ApiClient, id: AssetId, payload: &AssetPayload) -> Result<Asset, String> {
    api.put(&format!("/api/assets/{}", id), payload).await
}

pub async fn delete(api: ApiClient, id: AssetId) -> Result<ApiMessage, String> {
    api.delete(&format!("/api/assets/{}", id)).await
}

pub async fn allocate(
    api: ApiClient,
    id: AssetId,
    payload: &AllocateAssetPayload,
) -> Result<ApiMessage, String> {
    api.post(&format!("/api/assets/{}/allocate", id), payload)
        .await
}

pub async fn return_asset(
    api: ApiClient,
    id: AssetId,
    payload: &ReturnAssetPayload,
) -> Result<ApiMessage, String> {
    api.post(&format!("/api/assets/{}/return", id), payload)
        .await
}

/// Full allocation history of one asset, newest first.
pub async fn history(api: ApiClient, id: AssetId) -> Result<Vec<AssetAllocation>, String> {
    let body: Items<AssetAllocation> = api.get(&format!("/api/assets/{}/history", id)).await?;
    Ok(body.items)
}

#[cfg(test)]
mod tests {
    use contracts::domain::asset::{AssetQuery, AssetStatus};

    #[test]
    fn test_list_query_string() {
        let query = AssetQuery {
            q: Some("laptop".into()),
            status: Some(AssetStatus::InStock),
            category: None,
            page: 2,
            limit: 20,
        };
        let qs = serde_qs::to_string(&query).unwrap();
        assert_eq!(qs, "q=laptop&status=IN_STOCK&page=2&limit=20");

        let empty = serde_qs::to_string(&AssetQuery::default()).unwrap();
        assert_eq!(empty, "page=1&limit=10");
    }
}
