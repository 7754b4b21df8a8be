//! Browser entry point of the delivery admin console
#![forbid(unsafe_code)]

use delivery_admin_core::Config;
use delivery_admin_web::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::embedded().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Failed to load config: {e}, using defaults").into());
        Config::default()
    });

    let level = config
        .logging
        .level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Console logging unavailable: {e}").into());
    }
    tracing::info!("Starting delivery admin console");

    mount_to_body(move || view! { <App config=config /> });
}
