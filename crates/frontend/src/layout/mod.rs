pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use header::Header;
use sidebar::Sidebar;

/// Application frame: sidebar on the left, header on top, routed page
/// content in the middle.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar />
            <div class="app-shell__main">
                <Header />
                <main class="app-shell__content">
                    {children()}
                </main>
            </div>
        </div>
    }
}
