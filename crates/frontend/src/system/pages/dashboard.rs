use contracts::domain::asset::AssetQuery;
use contracts::shared::pagination::PageQuery;
use contracts::system::users::User;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::{asset, department, designation, project};
use crate::shared::api_client::use_api;
use crate::shared::components::data_table::{Column, DataTable, TablePaging};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::system::users::api as users_api;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();

    let departments = RwSignal::new(Option::<usize>::None);
    let designations = RwSignal::new(Option::<usize>::None);
    let assets = RwSignal::new(Option::<usize>::None);
    let projects = RwSignal::new(Option::<usize>::None);
    let team = RwSignal::new(Vec::<User>::new());
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        spawn_local(async move {
            // Counts are best-effort: a failed card shows a placeholder
            // while the rest of the dashboard still renders.
            if let Ok(list) = department::api::list(api).await {
                departments.set(Some(list.len()));
            }
            if let Ok(list) = designation::api::list(api).await {
                designations.set(Some(list.len()));
            }
            if let Ok(page) = asset::api::list(api, &AssetQuery { limit: 1, ..Default::default() }).await {
                assets.set(Some(page.total));
            }
            if let Ok(page) = project::api::list(api, PageQuery { page: 1, limit: 1 }).await {
                projects.set(Some(page.total));
            }
            match users_api::fetch_users(api).await {
                Ok(users) => {
                    team.set(users);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    load();

    let columns = vec![
        Column::new("Name", |u: &User| u.name.clone()),
        Column::new("Email", |u: &User| u.email.clone()),
        Column::new("Role", |u: &User| u.role.label().to_string()),
        Column::new("Status", |u: &User| {
            u.status.map(|s| s.label().to_string()).unwrap_or_default()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Company overview">
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Departments".to_string() icon_name="building".to_string() value=departments />
                <StatCard label="Designations".to_string() icon_name="badge".to_string() value=designations />
                <StatCard label="Assets".to_string() icon_name="package".to_string() value=assets />
                <StatCard label="Projects".to_string() icon_name="folder".to_string() value=projects />
            </div>

            {move || error.get().map(|e| view! {
                <div class="notice notice--error">{e}</div>
            })}

            <h2 class="section-title">"Team Directory"</h2>
            <DataTable
                columns=columns
                rows=Signal::derive(move || team.get())
                row_key=|u: &User| u.id.clone()
                paging=TablePaging::Client { rows_per_page: 10 }
            />
        </div>
    }
}
