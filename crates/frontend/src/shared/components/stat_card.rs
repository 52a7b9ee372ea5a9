use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard counter tile. `None` renders a placeholder while the count
/// loads or after a failed load.
#[component]
pub fn StatCard(
    label: String,
    icon_name: String,
    #[prop(into)] value: Signal<Option<usize>>,
) -> impl IntoView {
    let formatted = move || {
        value
            .get()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "\u{2014}".to_string())
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
