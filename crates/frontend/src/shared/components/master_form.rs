use contracts::domain::common::{MasterPayload, MasterStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::{Input, Select};
use crate::shared::modal::Modal;
use crate::shared::SaveHandler;

fn status_options() -> Vec<(String, String)> {
    MasterStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect()
}

/// Name + status form shared by the department and designation masters.
///
/// Validates locally (trimmed name required), then hands the payload to
/// the injected save handler. Success notifies the owner via `on_saved`;
/// failure keeps the modal open with the message inline.
#[component]
pub fn MasterFormModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    /// Seed values; re-read every time the modal opens
    #[prop(into)]
    initial: Signal<MasterPayload>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
    save: SaveHandler<MasterPayload>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let status = RwSignal::new(MasterStatus::Active);
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    // Re-seed fields on open so an Edit after an Add never shows stale
    // values.
    Effect::new(move |_| {
        if open.get() {
            let init = initial.get_untracked();
            name.set(init.name);
            status.set(init.status);
            error.set(None);
            saving.set(false);
        }
    });

    let submit = Callback::new(move |_: ()| {
        let payload = MasterPayload {
            name: name.get_untracked(),
            status: status.get_untracked(),
        }
        .normalized();
        if let Err(e) = payload.validate() {
            error.set(Some(e));
            return;
        }
        saving.set(true);
        let fut = save(payload);
        spawn_local(async move {
            match fut.await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    });

    let handle_name = Callback::new(move |value: String| {
        name.set(value);
        // the inline error clears as soon as the field is edited
        if error.get_untracked().is_some() {
            error.set(None);
        }
    });

    let handle_status = Callback::new(move |value: String| {
        status.set(if value == MasterStatus::Inactive.label() {
            MasterStatus::Inactive
        } else {
            MasterStatus::Active
        });
    });

    view! {
        <Show when=move || open.get()>
            <Modal title=title on_close=on_close>
                <form
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <Input
                        label="Name"
                        value=Signal::derive(move || name.get())
                        on_input=handle_name
                        placeholder="Enter name"
                        error=Signal::derive(move || error.get())
                    />
                    <Select
                        label="Status"
                        value=Signal::derive(move || status.get().label().to_string())
                        on_change=handle_status
                        options=status_options()
                    />
                    <div class="form__actions">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
