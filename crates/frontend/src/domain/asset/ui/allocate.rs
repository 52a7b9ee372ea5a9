use contracts::domain::asset::AllocateAssetPayload;
use contracts::system::users::User;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::modal::Modal;
use crate::shared::SaveHandler;

/// Hand an asset to an employee.
#[component]
pub fn AssetAllocateModal(
    #[prop(into)] open: Signal<bool>,
    /// Employees offered in the picker
    #[prop(into)]
    employees: Signal<Vec<User>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
    save: SaveHandler<AllocateAssetPayload>,
) -> impl IntoView {
    let form = RwSignal::new(AllocateAssetPayload::default());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if open.get() {
            form.set(AllocateAssetPayload::default());
            error.set(None);
            saving.set(false);
        }
    });

    let employee_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Select employee...".to_string())];
        options.extend(
            employees
                .get()
                .into_iter()
                .map(|u| (u.id, format!("{} ({})", u.name, u.email))),
        );
        options
    });

    let submit = Callback::new(move |_: ()| {
        let payload = form.get_untracked();
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

    view! {
        <Show when=move || open.get()>
            <Modal title="Allocate Asset".to_string() on_close=on_close>
                <form
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <Select
                        label="Employee"
                        value=Signal::derive(move || form.get().employee_id)
                        on_change=Callback::new(move |v: String| {
                            form.update(|p| p.employee_id = v);
                            if error.get_untracked().is_some() {
                                error.set(None);
                            }
                        })
                        options=employee_options
                    />
                    <Input
                        label="Allocated On"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().allocated_on))
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.allocated_on = parse_date_input(&v));
                            if error.get_untracked().is_some() {
                                error.set(None);
                            }
                        })
                    />
                    <Input
                        label="Expected Return"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().expected_return_on))
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.expected_return_on = parse_date_input(&v))
                        })
                    />
                    <Textarea
                        label="Notes"
                        value=Signal::derive(move || form.get().notes.unwrap_or_default())
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| {
                                p.notes = if v.trim().is_empty() { None } else { Some(v) }
                            })
                        })
                        rows=3
                    />

                    {move || error.get().map(|e| view! {
                        <p class="form__error form__error--summary">{e}</p>
                    })}

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
                            {move || if saving.get() { "Allocating..." } else { "Allocate" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
