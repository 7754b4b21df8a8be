//! Root component of the console

use crate::components::toast_host::ToastHost;
use crate::error_boundary::ConsoleErrorBoundary;
use crate::shell::Shell;
use crate::state::AppState;
use crate::toast::Toaster;
use delivery_admin_core::Config;
use leptos::prelude::*;

/// Provide the shared state and mount the shell
#[component]
pub fn App(
    /// Loaded configuration
    config: Config,
) -> impl IntoView {
    let toaster = Toaster::new(config.ui.toast_duration_ms);
    tracing::info!("Console talking to {}", config.api.base_url);
    provide_context(AppState::new(config));
    provide_context(toaster);

    view! {
        <ConsoleErrorBoundary>
            <Shell />
        </ConsoleErrorBoundary>
        <ToastHost />
    }
}
