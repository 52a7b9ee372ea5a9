use std::sync::Arc;

use contracts::domain::common::{EntityId, MasterPayload};
use contracts::domain::department::Department;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::api_client::use_api;
use crate::shared::components::confirm_dialog::{ConfirmDialog, DialogMode};
use crate::shared::components::data_table::{Column, DataTable, RowAction, TablePaging};
use crate::shared::components::master_form::MasterFormModal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::SaveHandler;

#[component]
pub fn DepartmentMasterPage() -> impl IntoView {
    let api = use_api();

    let items = RwSignal::new(Vec::<Department>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Department>::None);
    let delete_target = RwSignal::new(Option::<Department>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::list(api).await {
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

    let open_add = move |_| {
        editing.set(None);
        form_open.set(true);
    };

    let save: SaveHandler<MasterPayload> = Arc::new(move |payload| {
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
            "Department updated successfully.".to_string()
        } else {
            "Department added successfully.".to_string()
        }));
        load();
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete(api, target.id).await {
                Ok(_) => {
                    delete_target.set(None);
                    notice.set(Some("Department deleted successfully.".to_string()));
                    load();
                }
                Err(e) => {
                    delete_target.set(None);
                    error.set(Some(e));
                }
            }
        });
    });

    let columns = vec![
        Column::new("Department", |d: &Department| d.name.clone()),
        Column::new("Status", |d: &Department| d.status.label().to_string()),
    ];

    let actions = vec![
        RowAction::new("Edit", move |row: Department| {
            editing.set(Some(row));
            form_open.set(true);
        }),
        RowAction::danger("Delete", move |row: Department| {
            delete_target.set(Some(row));
        }),
    ];

    let initial = Signal::derive(move || {
        editing
            .get()
            .map(|d| MasterPayload {
                name: d.name,
                status: d.status,
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <PageHeader
                title="Department Master"
                subtitle="Manage departments (Add / Edit / Delete)"
            >
                <button class="button button--primary" on:click=open_add>
                    {icon("plus")}
                    "Add Department"
                </button>
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
                row_key=|d: &Department| d.id.as_string()
                actions=actions
                paging=TablePaging::Client { rows_per_page: 10 }
            />

            <MasterFormModal
                open=Signal::derive(move || form_open.get())
                title=Signal::derive(move || {
                    if editing.get().is_some() { "Edit Department" } else { "Add Department" }
                        .to_string()
                })
                initial=initial
                on_close=Callback::new(move |_: ()| form_open.set(false))
                on_saved=on_saved
                save=save
            />

            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete Department".to_string()
                message=Signal::derive(move || {
                    delete_target
                        .get()
                        .map(|d| format!("Are you sure you want to delete \"{}\"?", d.name))
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
