//! Modal dialog

use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop; clicking the backdrop closes it
#[component]
pub fn Modal(
    /// Dialog title
    #[prop(into)]
    title: String,
    /// Called by the close button and the backdrop
    on_close: Callback<()>,
    /// Dialog body
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// One `label: value` line of a detail dialog
#[component]
pub fn DetailRow(
    /// Field name
    label: &'static str,
    /// Field value
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value}</span>
        </div>
    }
}
