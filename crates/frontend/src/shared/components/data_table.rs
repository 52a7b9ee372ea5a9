//! Generic data table used by every list screen.
//!
//! Columns are typed projections, row actions are opaque callbacks, and
//! pagination is a tagged union picked once at construction: either the
//! table slices the full row set itself (client mode) or it displays
//! pre-sliced rows and delegates page/limit changes to the owner (server
//! mode). Mounting a table with the other variant starts over at page 1,
//! so the two strategies never mix at runtime.

use std::sync::Arc;

use contracts::shared::pagination::{clamp_page, page_bounds, total_pages};
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PaginationControls;

/// Table column: header label plus a typed projection of the row into its
/// display string. No reflective field lookup.
#[derive(Clone)]
pub struct Column<T> {
    pub label: String,
    render: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Column<T> {
    pub fn new(
        label: impl Into<String>,
        render: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            render: Arc::new(render),
        }
    }

    pub fn value(&self, row: &T) -> String {
        (self.render)(row)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionKind {
    #[default]
    Default,
    Danger,
}

/// Per-row action; the table invokes the handler with the row and is
/// agnostic to its semantics.
#[derive(Clone)]
pub struct RowAction<T: 'static> {
    pub label: String,
    pub kind: ActionKind,
    on_select: Callback<T>,
}

impl<T: Send + Sync + 'static> RowAction<T> {
    pub fn new(label: impl Into<String>, handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Default,
            on_select: Callback::new(handler),
        }
    }

    pub fn danger(label: impl Into<String>, handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            kind: ActionKind::Danger,
            ..Self::new(label, handler)
        }
    }

    fn callback(&self) -> Callback<T> {
        self.on_select
    }
}

/// Server-driven pagination: rows arrive pre-sliced, the owner holds
/// page/limit/total and performs the reload.
#[derive(Clone)]
pub struct ServerPaging {
    pub page: Signal<usize>,
    pub limit: Signal<usize>,
    pub total: Signal<usize>,
    pub on_page_change: Callback<usize>,
    pub on_limit_change: Callback<usize>,
}

/// Pagination strategy, resolved once at construction.
#[derive(Clone)]
pub enum TablePaging {
    /// The table computes pages over the full row set it is given.
    Client { rows_per_page: usize },
    /// The caller computes pages; the table only reports intents.
    Server(ServerPaging),
}

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    /// Full row set in client mode, the current page's rows in server mode
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Stable row identity, used as the render key
    row_key: fn(&T) -> String,
    #[prop(optional, into)] actions: Option<Vec<RowAction<T>>>,
    #[prop(optional, into)] paging: Option<TablePaging>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let column_count = columns.len() + usize::from(actions.is_some());

    let (visible, controls): (Signal<Vec<T>>, Option<AnyView>) = match paging {
        None => (rows, None),
        Some(TablePaging::Client { rows_per_page }) => {
            let page = RwSignal::new(1usize);
            let limit = RwSignal::new(rows_per_page);
            let pages = Memo::new(move |_| total_pages(rows.get().len(), limit.get()));
            // A page left pointing past the end after the set shrank is
            // corrected here on the next render, not persisted invalid.
            let effective = Memo::new(move |_| clamp_page(page.get(), pages.get()));
            let visible = Signal::derive(move || {
                let data = rows.get();
                let (start, end) = page_bounds(effective.get(), limit.get(), data.len());
                data[start..end].to_vec()
            });
            let controls = view! {
                <PaginationControls
                    current_page=Signal::derive(move || effective.get())
                    total_pages=Signal::derive(move || pages.get())
                    total_count=Signal::derive(move || rows.get().len())
                    page_size=limit
                    on_page_change=Callback::new(move |n: usize| page.set(n))
                    on_page_size_change=Callback::new(move |n: usize| {
                        limit.set(n);
                        page.set(1);
                    })
                />
            }
            .into_any();
            (visible, Some(controls))
        }
        Some(TablePaging::Server(server)) => {
            let total = server.total;
            let limit = server.limit;
            let pages = Signal::derive(move || total_pages(total.get(), limit.get()));
            let on_page = server.on_page_change;
            let on_limit = server.on_limit_change;
            let controls = view! {
                <PaginationControls
                    current_page=server.page
                    total_pages=pages
                    total_count=total
                    page_size=limit
                    on_page_change=on_page
                    // Changing the page size always starts over at page 1.
                    on_page_size_change=Callback::new(move |n: usize| {
                        on_limit.run(n);
                        on_page.run(1);
                    })
                />
            }
            .into_any();
            (rows, Some(controls))
        }
    };

    let header_cells = columns
        .iter()
        .map(|col| {
            let label = col.label.clone();
            view! { <th class="table__header-cell">{label}</th> }
        })
        .collect_view();
    let actions_header = actions
        .is_some()
        .then(|| view! { <th class="table__header-cell table__header-cell--actions">"Actions"</th> });

    let body_columns = columns;
    let row_actions = actions;
    let row_view = move |row: T| {
        let cells = body_columns
            .iter()
            .map(|col| {
                let text = col.value(&row);
                view! { <td class="table__cell">{text}</td> }
            })
            .collect_view();
        let action_cell = row_actions.as_ref().map(|list| {
            let buttons = list
                .iter()
                .map(|action| {
                    let label = action.label.clone();
                    let class = match action.kind {
                        ActionKind::Danger => "table-action table-action--danger",
                        ActionKind::Default => "table-action",
                    };
                    let handler = action.callback();
                    let row = row.clone();
                    view! {
                        <button type="button" class=class on:click=move |_| handler.run(row.clone())>
                            {label}
                        </button>
                    }
                })
                .collect_view();
            view! { <td class="table__cell table__cell--actions">{buttons}</td> }
        });
        view! { <tr class="table__row">{cells}{action_cell}</tr> }
    };

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {header_cells}
                        {actions_header}
                    </tr>
                </thead>
                <tbody>
                    {move || visible.get().is_empty().then(|| view! {
                        <tr class="table__row">
                            <td class="table__cell table__cell--empty" colspan=column_count>
                                "No data"
                            </td>
                        </tr>
                    })}
                    <For
                        each=move || visible.get()
                        key=move |row| row_key(row)
                        children=row_view
                    />
                </tbody>
            </table>
            {controls}
        </div>
    }
}
