//! Loading and failure placeholders

use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Loading(
    /// Text under the spinner
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{message.unwrap_or_else(|| "Carregando...".to_string())}</p>
        </div>
    }
}

/// Panel shown when the first load of a screen failed
#[component]
pub fn LoadFailed(
    /// Notification text of the failure
    #[prop(into)]
    message: String,
    /// Called when the operator asks for another attempt
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="load-failed">
            <p>{message}</p>
            <button class="btn btn-primary" on:click=move |_| on_retry.run(())>
                "Tentar novamente"
            </button>
        </div>
    }
}
