use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionData {
    pub token: String,
    pub user: SessionUser,
}

/// Session handle passed through context: a single object owning
/// read/save/clear, instead of ad-hoc storage access from call sites.
#[derive(Clone, Copy)]
pub struct AuthSession {
    state: RwSignal<Option<SessionData>>,
}

impl AuthSession {
    /// Restore whatever localStorage holds; the server remains the
    /// authority and will answer 401 if the token is stale.
    pub fn restore() -> Self {
        let restored = storage::load_session().map(|(token, user)| SessionData { token, user });
        Self {
            state: RwSignal::new(restored),
        }
    }

    pub fn save(&self, token: String, user: SessionUser) {
        log::info!("session opened for {}", user.username);
        storage::save_session(&token, &user);
        self.state.set(Some(SessionData { token, user }));
    }

    pub fn clear(&self) {
        storage::clear_session();
        self.state.set(None);
    }

    /// Request-time token read; deliberately untracked so API calls do not
    /// subscribe to session changes.
    pub fn token(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.as_ref().map(|d| d.token.clone()))
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.with(|s| s.as_ref().map(|d| d.user.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .with(|s| s.as_ref().map(|d| d.user.role.is_admin()).unwrap_or(false))
    }
}

pub fn provide_session() -> AuthSession {
    let session = AuthSession::restore();
    provide_context(session);
    session
}

pub fn use_session() -> AuthSession {
    use_context::<AuthSession>().expect("AuthSession not found in component tree")
}
