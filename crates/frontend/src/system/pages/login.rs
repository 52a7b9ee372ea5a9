use contracts::system::auth::{Role, SessionUser};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_client::use_api;
use crate::shared::components::confirm_dialog::{ConfirmDialog, DialogMode};
use crate::system::auth::context::use_session;
use crate::system::auth::{api, jwt};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api_client = use_api();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    // Post-login notice; navigation happens on acknowledge.
    let notice = RwSignal::new(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.trim().is_empty() || password_val.is_empty() {
            notice.set(Some(("Username and password are required".into(), false)));
            return;
        }

        is_loading.set(true);

        spawn_local(async move {
            match api::login(api_client, username_val.clone(), password_val).await {
                Ok(response) => {
                    // Token is decoded only to pick up display fields; the
                    // server stays the authority on validity.
                    let (id, role) = jwt::decode_claims(&response.token)
                        .map(|c| (c.id, c.role))
                        .unwrap_or_else(|| (String::new(), Role::Employee));
                    session.save(
                        response.token,
                        SessionUser {
                            id,
                            username: username_val,
                            role,
                        },
                    );
                    notice.set(Some(("Login successful".into(), true)));
                }
                Err(e) => {
                    notice.set(Some((e, false)));
                }
            }
            is_loading.set(false);
        });
    };

    let acknowledge = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let success = notice
                .get_untracked()
                .map(|(_, ok)| ok)
                .unwrap_or(false);
            notice.set(None);
            if success {
                navigate("/dashboard", Default::default());
            }
        })
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Employee Management System"</h1>
                <h2>"Sign in"</h2>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            class="form__input"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary login-submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || notice.get().is_some())
                title=Signal::derive(move || {
                    match notice.get() {
                        Some((_, true)) => "Success".to_string(),
                        _ => "Login failed".to_string(),
                    }
                })
                message=Signal::derive(move || notice.get().map(|(m, _)| m).unwrap_or_default())
                mode=DialogMode::Notice
                on_confirm=acknowledge
            />
        </div>
    }
}
