use contracts::domain::asset::ReturnAssetPayload;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::{Input, Textarea};
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::modal::Modal;
use crate::shared::SaveHandler;

/// Close out the current allocation of an asset.
#[component]
pub fn AssetReturnModal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
    save: SaveHandler<ReturnAssetPayload>,
) -> impl IntoView {
    let form = RwSignal::new(ReturnAssetPayload::default());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if open.get() {
            form.set(ReturnAssetPayload::default());
            error.set(None);
            saving.set(false);
        }
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
            <Modal title="Return Asset".to_string() on_close=on_close>
                <form
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <Input
                        label="Returned On"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().returned_on))
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.returned_on = parse_date_input(&v));
                            if error.get_untracked().is_some() {
                                error.set(None);
                            }
                        })
                    />
                    <Input
                        label="Condition"
                        value=Signal::derive(move || {
                            form.get().return_condition.unwrap_or_default()
                        })
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| {
                                p.return_condition =
                                    if v.trim().is_empty() { None } else { Some(v) }
                            })
                        })
                        placeholder="Good / damaged / ..."
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
                            {move || if saving.get() { "Returning..." } else { "Return" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
