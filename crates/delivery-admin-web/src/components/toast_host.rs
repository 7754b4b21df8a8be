//! Renders the toaster queue

use crate::toast::use_toaster;
use leptos::prelude::*;

/// Fixed stack of notifications; a click dismisses one
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let queue = toaster.queue();

    view! {
        <div class="toast-host">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                let:toast
            >
                <div class=toast.kind.class() on:click=move |_| toaster.dismiss(toast.id)>
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
