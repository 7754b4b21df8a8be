//! Platform settings screen

use crate::forms::settings::SettingsForm;
use leptos::prelude::*;

/// Settings screen
#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings-page">
            <SettingsForm />
        </div>
    }
}
