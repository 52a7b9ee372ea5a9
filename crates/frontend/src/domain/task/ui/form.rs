use contracts::domain::task::{CreateTaskPayload, TaskPriority};
use contracts::system::users::User;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::modal::Modal;
use crate::shared::SaveHandler;

fn priority_options() -> Vec<(String, String)> {
    TaskPriority::ALL
        .iter()
        .map(|p| (p.label().to_string(), p.label().to_string()))
        .collect()
}

#[component]
pub fn TaskFormModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] initial: Signal<CreateTaskPayload>,
    /// Assignee choices: the project's team
    #[prop(into)]
    employees: Signal<Vec<User>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
    save: SaveHandler<CreateTaskPayload>,
) -> impl IntoView {
    let form = RwSignal::new(CreateTaskPayload::default());
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

    let assignee_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Select assignee...".to_string())];
        options.extend(employees.get().into_iter().map(|u| (u.id, u.name)));
        options
    });

    let submit = Callback::new(move |_: ()| {
        let mut payload = form.get_untracked();
        payload.title = payload.title.trim().to_string();
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
                        label="Title"
                        value=Signal::derive(move || form.get().title)
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.title = v);
                            touch();
                        })
                        placeholder="Task title"
                    />
                    <Textarea
                        label="Description"
                        value=Signal::derive(move || form.get().description.unwrap_or_default())
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| {
                                p.description = if v.trim().is_empty() { None } else { Some(v) }
                            })
                        })
                        rows=3
                    />
                    <Select
                        label="Assigned To"
                        value=Signal::derive(move || form.get().assigned_to)
                        on_change=Callback::new(move |v: String| {
                            form.update(|p| p.assigned_to = v);
                            touch();
                        })
                        options=assignee_options
                    />
                    <Select
                        label="Priority"
                        value=Signal::derive(move || form.get().priority.label().to_string())
                        on_change=Callback::new(move |v: String| {
                            let priority = TaskPriority::ALL
                                .into_iter()
                                .find(|p| p.label() == v)
                                .unwrap_or_default();
                            form.update(|p| p.priority = priority);
                        })
                        options=priority_options()
                    />
                    <Input
                        label="Due Date"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().due_date))
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.due_date = parse_date_input(&v))
                        })
                    />
                    <Input
                        label="Estimated Hours"
                        input_type="number"
                        value=Signal::derive(move || {
                            form.get()
                                .estimated_hours
                                .map(|h| h.to_string())
                                .unwrap_or_default()
                        })
                        on_input=Callback::new(move |v: String| {
                            form.update(|p| p.estimated_hours = v.trim().parse().ok());
                            touch();
                        })
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
