use leptos::prelude::*;

/// One dialog primitive, two faces: a confirmation with confirm/cancel,
/// or a notice with a single acknowledge button.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    #[default]
    Confirm,
    Notice,
}

#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(optional)] mode: DialogMode,
    /// Label of the confirm/acknowledge button
    #[prop(optional, into)]
    confirm_text: MaybeProp<String>,
    #[prop(optional, into)] cancel_text: MaybeProp<String>,
    /// Styles the confirm button destructively (deletes)
    #[prop(optional)]
    danger: bool,
    on_confirm: Callback<()>,
    /// Defaults to `on_confirm` for notices
    #[prop(optional, into)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let confirm_label = move || {
        confirm_text.get().unwrap_or_else(|| {
            match mode {
                DialogMode::Confirm => "Yes",
                DialogMode::Notice => "OK",
            }
            .to_string()
        })
    };
    let cancel_label = move || cancel_text.get().unwrap_or_else(|| "Cancel".to_string());
    let cancel = move || {
        if let Some(handler) = on_cancel {
            handler.run(());
        } else {
            on_confirm.run(());
        }
    };
    let confirm_class = if danger {
        "button button--danger"
    } else {
        "button button--primary"
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| cancel()>
                <div class="modal modal--dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                    </div>
                    <div class="modal-body">
                        <p class="dialog-message">{move || message.get()}</p>
                    </div>
                    <div class="modal-footer">
                        {matches!(mode, DialogMode::Confirm).then(|| view! {
                            <button type="button" class="button button--secondary" on:click=move |_| cancel()>
                                {cancel_label}
                            </button>
                        })}
                        <button type="button" class=confirm_class on:click=move |_| on_confirm.run(())>
                            {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
