use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::api_client::ApiClient;
use crate::system::auth::context::provide_session;

#[component]
pub fn App() -> impl IntoView {
    // The session handle and the API client built on top of it are the only
    // ambient state; everything else lives in page containers.
    let session = provide_session();
    provide_context(ApiClient::new(session));

    view! {
        <AppRoutes />
    }
}
