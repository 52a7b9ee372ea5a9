use contracts::domain::asset::{AssetPayload, AssetStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::{Input, Select};
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::modal::Modal;
use crate::shared::SaveHandler;

fn opt(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn status_options() -> Vec<(String, String)> {
    AssetStatus::ALL
        .iter()
        .map(|s| (s.as_wire().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn AssetFormModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] initial: Signal<AssetPayload>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
    save: SaveHandler<AssetPayload>,
) -> impl IntoView {
    let form = RwSignal::new(AssetPayload::default());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if open.get() {
            form.set(initial.get_untracked());
            error.set(None);
            saving.set(false);
        }
    });

    let touch = move || {
        if error.get_untracked().is_some() {
            error.set(None);
        }
    };

    let submit = Callback::new(move |_: ()| {
        let mut payload = form.get_untracked();
        payload.asset_code = payload.asset_code.trim().to_string();
        payload.name = payload.name.trim().to_string();
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
            <Modal title=title on_close=on_close>
                <form
                    class="form form--two-column"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <Input
                        label="Asset Code"
                        value=Signal::derive(move || form.get().asset_code)
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.asset_code = v);
                            touch();
                        })
                        placeholder="AST-001"
                    />
                    <Input
                        label="Name"
                        value=Signal::derive(move || form.get().name)
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.name = v);
                            touch();
                        })
                        placeholder="ThinkPad T14"
                    />
                    <Input
                        label="Serial No"
                        value=Signal::derive(move || form.get().serial_no.unwrap_or_default())
                        on_input=Callback::new(move |v: String| form.update(|p| p.serial_no = opt(v)))
                    />
                    <Input
                        label="Category"
                        value=Signal::derive(move || form.get().category.unwrap_or_default())
                        on_input=Callback::new(move |v: String| form.update(|p| p.category = opt(v)))
                        placeholder="Laptop"
                    />
                    <Input
                        label="Brand"
                        value=Signal::derive(move || form.get().brand.unwrap_or_default())
                        on_input=Callback::new(move |v: String| form.update(|p| p.brand = opt(v)))
                    />
                    <Input
                        label="Model"
                        value=Signal::derive(move || form.get().model.unwrap_or_default())
                        on_input=Callback::new(move |v: String| form.update(|p| p.model = opt(v)))
                    />
                    <Input
                        label="Purchase Date"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().purchase_date))
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.purchase_date = parse_date_input(&v))
                        })
                    />
                    <Input
                        label="Warranty End"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().warranty_end_date))
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.warranty_end_date = parse_date_input(&v))
                        })
                    />
                    <Input
                        label="Cost"
                        input_type="number"
                        value=Signal::derive(move || {
                            form.get().cost.map(|c| c.to_string()).unwrap_or_default()
                        })
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.cost = v.trim().parse().ok());
                            touch();
                        })
                    />
                    <Select
                        label="Status"
                        value=Signal::derive(move || form.get().status.as_wire().to_string())
                        on_change=Callback::new(move |v: String| {
                            let status = AssetStatus::ALL
                                .into_iter()
                                .find(|s| s.as_wire() == v)
                                .unwrap_or_default();
                            form.update(|p| p.status = status);
                        })
                        options=status_options()
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
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
