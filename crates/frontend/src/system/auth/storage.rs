use contracts::system::auth::SessionUser;
use web_sys::window;

const TOKEN_KEY: &str = "ems_token";
const USER_KEY: &str = "ems_user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist token and user together; a session is only considered present
/// when both keys are readable.
pub fn save_session(token: &str, user: &SessionUser) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Load the persisted session, if both halves are present and readable.
pub fn load_session() -> Option<(String, SessionUser)> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let raw_user = storage.get_item(USER_KEY).ok()??;
    let user = serde_json::from_str(&raw_user).ok()?;
    Some((token, user))
}

/// Remove both session keys.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
