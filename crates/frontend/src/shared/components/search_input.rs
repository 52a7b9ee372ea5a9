use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 400;

/// Debounced search box. Each keystroke restarts the delay; only the
/// latest value is reported once typing pauses.
#[component]
pub fn SearchInput(
    /// Committed value owned by the caller; the box follows it, so an
    /// external reset (e.g. "Clear Filters") also clears the field.
    #[prop(optional, into)]
    value: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    on_search: Callback<String>,
    #[prop(optional)] delay_ms: Option<u32>,
) -> impl IntoView {
    let delay = delay_ms.unwrap_or(DEBOUNCE_MS);
    let text = RwSignal::new(String::new());
    let generation = RwSignal::new(0u64);

    Effect::new(move |_| {
        if let Some(committed) = value.get() {
            text.set(committed);
        }
    });

    let handle_input = move |typed: String| {
        text.set(typed.clone());
        let my_generation = generation.get_untracked() + 1;
        generation.set(my_generation);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // a newer keystroke restarted the delay; this one is stale
            if generation.get_untracked() == my_generation {
                on_search.run(typed);
            }
        });
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                class="form__input search-input__field"
                type="search"
                prop:value=move || text.get()
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
        </div>
    }
}
