use contracts::domain::common::EntityId;
use contracts::domain::project::Project;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::domain::project::api;
use crate::shared::api_client::use_api;
use crate::shared::components::data_table::{Column, DataTable, RowAction, TablePaging};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// Projects the signed-in employee is assigned to.
#[component]
pub fn MyProjectsPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let items = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::my_projects(api).await {
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

    let columns = vec![
        Column::new("Name", |p: &Project| p.name.clone()),
        Column::new("Start Date", |p: &Project| format_date(p.start_date)),
        Column::new("Time Limit", |p: &Project| format_date(p.time_limit)),
        Column::new("Status", |p: &Project| p.status.label().to_string()),
    ];

    let open_tasks = {
        let navigate = navigate.clone();
        move |row: Project| {
            navigate(&format!("/projects/{}/tasks", row.id), Default::default());
        }
    };

    let actions = vec![RowAction::new("Tasks", open_tasks)];

    view! {
        <div class="page">
            <PageHeader title="My Projects" subtitle="Projects you are assigned to">
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

            <DataTable
                columns=columns
                rows=Signal::derive(move || items.get())
                row_key=|p: &Project| p.id.as_string()
                actions=actions
                paging=TablePaging::Client { rows_per_page: 10 }
            />
        </div>
    }
}
