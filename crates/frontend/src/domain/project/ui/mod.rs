mod form;
pub mod my_projects;

use std::sync::Arc;

use contracts::domain::common::EntityId;
use contracts::domain::project::{Project, ProjectPayload};
use contracts::shared::pagination::{total_pages, PageQuery, DEFAULT_PAGE_SIZE};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::api_client::use_api;
use crate::shared::components::confirm_dialog::{ConfirmDialog, DialogMode};
use crate::shared::components::data_table::{
    Column, DataTable, RowAction, ServerPaging, TablePaging,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::SaveHandler;
use crate::system::users::api as users_api;

use form::ProjectFormModal;

#[component]
pub fn ProjectsAdminPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let rows = RwSignal::new(Vec::<Project>::new());
    let total = RwSignal::new(0usize);
    let page = RwSignal::new(1usize);
    let limit = RwSignal::new(DEFAULT_PAGE_SIZE);
    let reload = RwSignal::new(0u32);

    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Project>::None);
    let delete_target = RwSignal::new(Option::<Project>::None);

    let users = RwSignal::new(Vec::<User>::new());

    Effect::new(move |_| {
        let query = PageQuery {
            page: page.get(),
            limit: limit.get(),
        };
        reload.get();
        loading.set(true);
        spawn_local(async move {
            match api::list(api, query).await {
                Ok(result) => {
                    let pages = result
                        .total_pages
                        .unwrap_or_else(|| total_pages(result.total, result.limit));
                    rows.set(result.items);
                    total.set(result.total);
                    error.set(None);
                    if page.get_untracked() > pages {
                        page.set(1);
                    }
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    spawn_local(async move {
        match users_api::fetch_users(api).await {
            Ok(list) => users.set(list),
            Err(e) => log::warn!("failed to load users for project picker: {}", e),
        }
    });

    let save: SaveHandler<ProjectPayload> = Arc::new(move |payload| {
        Box::pin(async move {
            match editing.get_untracked() {
                Some(existing) => api::update(api, existing.id, &payload).await.map(|_| ()),
                None => api::create(api, &payload).await.map(|_| ()),
            }
        })
    });

    let on_saved = Callback::new(move |_: ()| {
        let was_edit = editing.get_untracked().is_some();
        form_open.set(false);
        editing.set(None);
        notice.set(Some(if was_edit {
            "Project updated successfully.".to_string()
        } else {
            "Project created successfully.".to_string()
        }));
        reload.update(|n| *n += 1);
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::soft_delete(api, target.id).await {
                Ok(_) => {
                    delete_target.set(None);
                    notice.set(Some("Project deleted successfully.".to_string()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    delete_target.set(None);
                    error.set(Some(e));
                }
            }
        });
    });

    let columns = vec![
        Column::new("Name", |p: &Project| p.name.clone()),
        Column::new("Start Date", |p: &Project| format_date(p.start_date)),
        Column::new("Time Limit", |p: &Project| format_date(p.time_limit)),
        Column::new("Status", |p: &Project| p.status.label().to_string()),
        Column::new("Team", |p: &Project| p.employees.len().to_string()),
    ];

    let open_tasks = {
        let navigate = navigate.clone();
        move |row: Project| {
            navigate(
                &format!("/projects/{}/tasks", row.id),
                Default::default(),
            );
        }
    };

    let actions = vec![
        RowAction::new("Tasks", open_tasks),
        RowAction::new("Edit", move |row: Project| {
            editing.set(Some(row));
            form_open.set(true);
        }),
        RowAction::danger("Delete", move |row: Project| {
            delete_target.set(Some(row));
        }),
    ];

    let initial = Signal::derive(move || {
        editing
            .get()
            .map(|p| ProjectPayload {
                name: p.name,
                description: p.description,
                start_date: Some(p.start_date),
                time_limit: Some(p.time_limit),
                status: p.status,
                employees: p.employees.into_iter().map(|u| u.id).collect(),
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <PageHeader title="Projects" subtitle="Create and assign projects">
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        editing.set(None);
                        form_open.set(true);
                    }
                >
                    {icon("plus")}
                    "New Project"
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
                rows=Signal::derive(move || rows.get())
                row_key=|p: &Project| p.id.as_string()
                actions=actions
                paging=TablePaging::Server(ServerPaging {
                    page: page.into(),
                    limit: limit.into(),
                    total: Signal::derive(move || total.get()),
                    on_page_change: Callback::new(move |n: usize| page.set(n)),
                    on_limit_change: Callback::new(move |n: usize| limit.set(n)),
                })
            />

            <ProjectFormModal
                open=Signal::derive(move || form_open.get())
                title=Signal::derive(move || {
                    if editing.get().is_some() { "Edit Project" } else { "New Project" }.to_string()
                })
                initial=initial
                employees=Signal::derive(move || users.get())
                on_close=Callback::new(move |_: ()| form_open.set(false))
                on_saved=on_saved
                save=save
            />

            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete Project".to_string()
                message=Signal::derive(move || {
                    delete_target
                        .get()
                        .map(|p| format!("Are you sure you want to delete \"{}\"?", p.name))
                        .unwrap_or_default()
                })
                confirm_text="Delete"
                danger=true
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| delete_target.set(None))
            />

            <ConfirmDialog
                open=Signal::derive(move || notice.get().is_some())
                title="Success".to_string()
                message=Signal::derive(move || notice.get().unwrap_or_default())
                mode=DialogMode::Notice
                on_confirm=Callback::new(move |_: ()| notice.set(None))
            />
        </div>
    }
}
