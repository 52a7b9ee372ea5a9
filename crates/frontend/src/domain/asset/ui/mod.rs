mod allocate;
mod form;
mod history;
mod return_modal;

use std::sync::Arc;

use contracts::domain::asset::{
    AllocateAssetPayload, Asset, AssetAllocation, AssetPayload, AssetQuery, AssetStatus,
    ReturnAssetPayload,
};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{total_pages, DEFAULT_PAGE_SIZE};
use contracts::system::users::User;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::api_client::use_api;
use crate::shared::components::confirm_dialog::{ConfirmDialog, DialogMode};
use crate::shared::components::data_table::{
    Column, DataTable, RowAction, ServerPaging, TablePaging,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::SaveHandler;
use crate::system::users::api as users_api;

use allocate::AssetAllocateModal;
use form::AssetFormModal;
use history::AssetHistoryModal;
use return_modal::AssetReturnModal;

fn status_filter_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "All Status".to_string())];
    options.extend(
        AssetStatus::ALL
            .iter()
            .map(|s| (s.as_wire().to_string(), s.label().to_string())),
    );
    options
}

#[component]
pub fn AssetMasterPage() -> impl IntoView {
    let api = use_api();

    // server-paged list state
    let rows = RwSignal::new(Vec::<Asset>::new());
    let total = RwSignal::new(0usize);
    let page = RwSignal::new(1usize);
    let limit = RwSignal::new(DEFAULT_PAGE_SIZE);
    let q = RwSignal::new(String::new());
    let status_filter = RwSignal::new(Option::<AssetStatus>::None);
    let category = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    // modal state
    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Asset>::None);
    let allocate_target = RwSignal::new(Option::<Asset>::None);
    let return_target = RwSignal::new(Option::<Asset>::None);
    let history_target = RwSignal::new(Option::<Asset>::None);
    let history_items = RwSignal::new(Vec::<AssetAllocation>::new());
    let delete_target = RwSignal::new(Option::<Asset>::None);

    let users = RwSignal::new(Vec::<User>::new());

    // The list reloads whenever page, limit, filters or the reload tick
    // change. Responses are not fenced; the last one to land wins.
    Effect::new(move |_| {
        let query = AssetQuery {
            q: {
                let text = q.get();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            },
            status: status_filter.get(),
            category: {
                let text = category.get();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            },
            page: page.get(),
            limit: limit.get(),
        };
        reload.get();
        loading.set(true);
        spawn_local(async move {
            match api::list(api, &query).await {
                Ok(result) => {
                    let pages = total_pages(result.total, result.limit);
                    rows.set(result.items);
                    total.set(result.total);
                    error.set(None);
                    // deletes can leave the page dangling past the end
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
            Err(e) => log::warn!("failed to load users for allocation picker: {}", e),
        }
    });

    let save: SaveHandler<AssetPayload> = Arc::new(move |payload| {
        Box::pin(async move {
            match editing.get_untracked() {
                Some(existing) => api::update(api, existing.id, &payload).await.map(|_| ()),
                None => api::create(api, &payload).await.map(|_| ()),
            }
        })
    });

    let allocate_save: SaveHandler<AllocateAssetPayload> = Arc::new(move |payload| {
        Box::pin(async move {
            let Some(target) = allocate_target.get_untracked() else {
                return Err("No asset selected".to_string());
            };
            api::allocate(api, target.id, &payload).await.map(|_| ())
        })
    });

    let return_save: SaveHandler<ReturnAssetPayload> = Arc::new(move |payload| {
        Box::pin(async move {
            let Some(target) = return_target.get_untracked() else {
                return Err("No asset selected".to_string());
            };
            api::return_asset(api, target.id, &payload).await.map(|_| ())
        })
    });

    let on_saved = Callback::new(move |_: ()| {
        let was_edit = editing.get_untracked().is_some();
        form_open.set(false);
        editing.set(None);
        notice.set(Some(if was_edit {
            "Asset updated successfully.".to_string()
        } else {
            "Asset added successfully.".to_string()
        }));
        reload.update(|n| *n += 1);
    });

    let on_allocated = Callback::new(move |_: ()| {
        allocate_target.set(None);
        notice.set(Some("Asset allocated successfully.".to_string()));
        reload.update(|n| *n += 1);
    });

    let on_returned = Callback::new(move |_: ()| {
        return_target.set(None);
        notice.set(Some("Asset returned successfully.".to_string()));
        reload.update(|n| *n += 1);
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete(api, target.id).await {
                Ok(_) => {
                    delete_target.set(None);
                    notice.set(Some("Asset deleted successfully.".to_string()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    delete_target.set(None);
                    error.set(Some(e));
                }
            }
        });
    });

    let open_history = move |asset: Asset| {
        spawn_local(async move {
            match api::history(api, asset.id).await {
                Ok(items) => {
                    history_items.set(items);
                    history_target.set(Some(asset));
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let columns = vec![
        Column::new("Code", |a: &Asset| a.asset_code.clone()),
        Column::new("Name", |a: &Asset| a.name.clone()),
        Column::new("Category", |a: &Asset| {
            a.category.clone().unwrap_or_default()
        }),
        Column::new("Status", |a: &Asset| a.status.label().to_string()),
        Column::new("Allocated To", |a: &Asset| {
            a.current_allocation
                .as_ref()
                .map(|al| al.allocated_to.name.clone())
                .unwrap_or_else(|| "\u{2014}".to_string())
        }),
        Column::new("Purchased", |a: &Asset| format_date_opt(a.purchase_date)),
    ];

    let actions = vec![
        RowAction::new("Edit", move |row: Asset| {
            editing.set(Some(row));
            form_open.set(true);
        }),
        RowAction::new("Allocate", move |row: Asset| {
            allocate_target.set(Some(row));
        }),
        RowAction::new("Return", move |row: Asset| {
            return_target.set(Some(row));
        }),
        RowAction::new("History", open_history),
        RowAction::danger("Delete", move |row: Asset| {
            delete_target.set(Some(row));
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Asset Master" subtitle="Track assets and their allocations">
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        editing.set(None);
                        form_open.set(true);
                    }
                >
                    {icon("plus")}
                    "Add Asset"
                </button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || q.get())
                    placeholder="Search code, name, serial..."
                    on_search=Callback::new(move |text: String| {
                        q.set(text);
                        page.set(1);
                    })
                />
                <Select
                    value=Signal::derive(move || {
                        status_filter.get().map(|s| s.as_wire().to_string()).unwrap_or_default()
                    })
                    on_change=Callback::new(move |v: String| {
                        status_filter.set(AssetStatus::ALL.into_iter().find(|s| s.as_wire() == v));
                        page.set(1);
                    })
                    options=status_filter_options()
                />
                <input
                    class="form__input filter-bar__category"
                    type="text"
                    placeholder="Category"
                    prop:value=move || category.get()
                    on:change=move |ev| {
                        category.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        q.set(String::new());
                        status_filter.set(None);
                        category.set(String::new());
                        page.set(1);
                    }
                >
                    "Clear Filters"
                </button>
            </div>

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
                row_key=|a: &Asset| a.id.as_string()
                actions=actions
                paging=TablePaging::Server(ServerPaging {
                    page: page.into(),
                    limit: limit.into(),
                    total: Signal::derive(move || total.get()),
                    on_page_change: Callback::new(move |n: usize| page.set(n)),
                    on_limit_change: Callback::new(move |n: usize| limit.set(n)),
                })
            />

            <AssetFormModal
                open=Signal::derive(move || form_open.get())
                title=Signal::derive(move || {
                    if editing.get().is_some() { "Edit Asset" } else { "Add Asset" }.to_string()
                })
                initial=Signal::derive(move || {
                    editing
                        .get()
                        .map(|a| AssetPayload {
                            asset_code: a.asset_code,
                            serial_no: a.serial_no,
                            name: a.name,
                            category: a.category,
                            brand: a.brand,
                            model: a.model,
                            purchase_date: a.purchase_date,
                            warranty_end_date: a.warranty_end_date,
                            cost: a.cost,
                            status: a.status,
                        })
                        .unwrap_or_default()
                })
                on_close=Callback::new(move |_: ()| form_open.set(false))
                on_saved=on_saved
                save=save
            />

            <AssetAllocateModal
                open=Signal::derive(move || allocate_target.get().is_some())
                employees=Signal::derive(move || users.get())
                on_close=Callback::new(move |_: ()| allocate_target.set(None))
                on_saved=on_allocated
                save=allocate_save
            />

            <AssetReturnModal
                open=Signal::derive(move || return_target.get().is_some())
                on_close=Callback::new(move |_: ()| return_target.set(None))
                on_saved=on_returned
                save=return_save
            />

            <AssetHistoryModal
                open=Signal::derive(move || history_target.get().is_some())
                title=Signal::derive(move || {
                    history_target
                        .get()
                        .map(|a| format!("History: {}", a.name))
                        .unwrap_or_else(|| "History".to_string())
                })
                items=Signal::derive(move || history_items.get())
                on_close=Callback::new(move |_: ()| history_target.set(None))
            />

            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete Asset".to_string()
                message=Signal::derive(move || {
                    delete_target
                        .get()
                        .map(|a| format!("Are you sure you want to delete \"{}\"?", a.name))
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
