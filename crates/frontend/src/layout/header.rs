use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = move || {
        session
            .user()
            .map(|u| u.username)
            .unwrap_or_default()
    };
    let role = move || {
        session
            .user()
            .map(|u| u.role.label().to_string())
            .unwrap_or_default()
    };

    let logout = move |_| {
        log::info!("logout requested");
        session.clear();
        navigate("/login", Default::default());
    };

    view! {
        <header class="header">
            <div class="header__title">"Employee Management System"</div>
            <div class="header__user">
                <span class="header__username">{username}</span>
                <span class="header__role">{role}</span>
                <button class="button button--secondary header__logout" on:click=logout>
                    {icon("log-out")}
                    "Logout"
                </button>
            </div>
        </header>
    }
}
