use contracts::system::users::User;

use crate::shared::api_client::ApiClient;

/// Directory of users, used to fill assignee/employee pickers.
pub async fn fetch_users(api: ApiClient) -> Result<Vec<User>, String> {
    api.get("/api/users").await
}
