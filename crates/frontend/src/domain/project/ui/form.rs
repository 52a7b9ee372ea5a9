use std::collections::HashSet;

use contracts::domain::project::{ProjectPayload, ProjectStatus};
use contracts::system::users::User;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::modal::Modal;
use crate::shared::SaveHandler;

fn status_options() -> Vec<(String, String)> {
    ProjectStatus::ALL
        .iter()
        .map(|s| (s.label().to_lowercase(), s.label().to_string()))
        .collect()
}

#[component]
pub fn ProjectFormModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] initial: Signal<ProjectPayload>,
    /// Employees offered in the assignment picker
    #[prop(into)]
    employees: Signal<Vec<User>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
    save: SaveHandler<ProjectPayload>,
) -> impl IntoView {
    let form = RwSignal::new(ProjectPayload::default());
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

    let selected_ids = Signal::derive(move || {
        form.get().employees.into_iter().collect::<HashSet<String>>()
    });

    let toggle_employee = move |id: String, checked: bool| {
        form.update(|p| {
            if checked {
                if !p.employees.contains(&id) {
                    p.employees.push(id);
                }
            } else {
                p.employees.retain(|e| e != &id);
            }
        });
    };

    let submit = Callback::new(move |_: ()| {
        let mut payload = form.get_untracked();
        payload.name = payload.name.trim().to_string();
        payload.description = payload.description.trim().to_string();
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
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <Input
                        label="Name"
                        value=Signal::derive(move || form.get().name)
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.name = v);
                            touch();
                        })
                        placeholder="Project name"
                    />
                    <Textarea
                        label="Description"
                        value=Signal::derive(move || form.get().description)
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.description = v);
                            touch();
                        })
                        rows=3
                    />
                    <Input
                        label="Start Date"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().start_date))
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.start_date = parse_date_input(&v));
                            touch();
                        })
                    />
                    <Input
                        label="Time Limit"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().time_limit))
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.time_limit = parse_date_input(&v));
                            touch();
                        })
                    />
                    <Select
                        label="Status"
                        value=Signal::derive(move || form.get().status.label().to_lowercase())
                        on_change=Callback::new(move |v: String| {
                            let status = ProjectStatus::ALL
                                .into_iter()
                                .find(|s| s.label().to_lowercase() == v)
                                .unwrap_or_default();
                            form.update(|p| p.status = status);
                        })
                        options=status_options()
                    />

                    <div class="form__group">
                        <label class="form__label">"Employees"</label>
                        <div class="employee-picker">
                            <For
                                each=move || employees.get()
                                key=|u| u.id.clone()
                                children=move |user: User| {
                                    let id = user.id.clone();
                                    let id_for_check = id.clone();
                                    let checked = Signal::derive(move || {
                                        selected_ids.get().contains(&id_for_check)
                                    });
                                    view! {
                                        <label class="employee-picker__row">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || checked.get()
                                                on:change=move |ev| {
                                                    toggle_employee(
                                                        id.clone(),
                                                        event_target_checked(&ev),
                                                    )
                                                }
                                            />
                                            <span>{user.name.clone()}</span>
                                            <span class="employee-picker__email">{user.email.clone()}</span>
                                        </label>
                                    }
                                }
                            />
                        </div>
                    </div>

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
