use contracts::domain::asset::AssetAllocation;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::date_utils::format_date_opt;
use crate::shared::modal::Modal;

/// Read-only allocation history of one asset.
#[component]
pub fn AssetHistoryModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] items: Signal<Vec<AssetAllocation>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let columns = vec![
        Column::new("Employee", |a: &AssetAllocation| a.allocated_to.name.clone()),
        Column::new("Allocated On", |a: &AssetAllocation| {
            format_date_opt(Some(a.allocated_on))
        }),
        Column::new("Expected Return", |a: &AssetAllocation| {
            format_date_opt(a.expected_return_on)
        }),
        Column::new("Returned On", |a: &AssetAllocation| {
            format_date_opt(a.returned_on)
        }),
        Column::new("Condition", |a: &AssetAllocation| {
            a.return_condition.clone().unwrap_or_default()
        }),
        Column::new("Notes", |a: &AssetAllocation| {
            a.notes.clone().unwrap_or_default()
        }),
    ];

    view! {
        <Show when=move || open.get()>
            {
                let columns = columns.clone();
                view! {
                    <Modal title=title on_close=on_close>
                        <DataTable
                            columns=columns.clone()
                            rows=items
                            row_key=|a: &AssetAllocation| a.id.as_string()
                        />
                    </Modal>
                }
            }
        </Show>
    }
}
