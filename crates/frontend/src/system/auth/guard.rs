use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Renders children only when a session is present, otherwise sends the
/// user to the login entry point. A 401 anywhere clears the session, so
/// this gate also handles forced logout.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Requires an admin or superadmin role on top of authentication.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_admin()
            fallback=|| view! { <div class="access-denied">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
