use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_client::ApiClient;

/// Exchange credentials for a token. Goes through the shared client so
/// error normalization stays in one place; no bearer header is attached
/// while the session is empty.
pub async fn login(
    api: ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, String> {
    api.post("/api/auth/login", &LoginRequest { username, password })
        .await
}
