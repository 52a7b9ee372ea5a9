use contracts::domain::task::{MyTask, TaskStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::task::api;
use crate::shared::api_client::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;

/// Tasks assigned to the signed-in employee, with inline status
/// transitions.
#[component]
pub fn MyTasksPage() -> impl IntoView {
    let api = use_api();

    let items = RwSignal::new(Vec::<MyTask>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::my_tasks(api).await {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    load();

    let change_status = move |task: MyTask, status: TaskStatus| {
        if task.status == status {
            return;
        }
        spawn_local(async move {
            match api::update_status(api, task.id, status).await {
                Ok(_) => load(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="My Tasks" subtitle="Everything assigned to you">
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || loading.get().then(|| view! {
                <div class="loading-hint">"Loading..."</div>
            })}
            {move || error.get().map(|e| view! {
                <div class="notice notice--error">
                    <span>{e}</span>
                    <button class="notice__dismiss" on:click=move |_| error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Project"</th>
                            <th class="table__header-cell">"Task"</th>
                            <th class="table__header-cell">"Priority"</th>
                            <th class="table__header-cell">"Due"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let tasks = items.get();
                            if tasks.is_empty() {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan=5>
                                            "No data"
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                tasks
                                    .into_iter()
                                    .map(|task| {
                                        let current = task.status;
                                        let task_for_change = task.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{task.project.name.clone()}</td>
                                                <td class="table__cell">{task.title.clone()}</td>
                                                <td class="table__cell">{task.priority.label()}</td>
                                                <td class="table__cell">{format_date_opt(task.due_date)}</td>
                                                <td class="table__cell">
                                                    <select
                                                        class="form__select"
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            let next = TaskStatus::ALL
                                                                .into_iter()
                                                                .find(|s| s.label() == value)
                                                                .unwrap_or(current);
                                                            change_status(task_for_change.clone(), next);
                                                        }
                                                    >
                                                        {TaskStatus::ALL.into_iter().map(|status| {
                                                            view! {
                                                                <option
                                                                    value=status.label()
                                                                    selected={status == current}
                                                                >
                                                                    {status.label()}
                                                                </option>
                                                            }
                                                        }).collect_view()}
                                                    </select>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
