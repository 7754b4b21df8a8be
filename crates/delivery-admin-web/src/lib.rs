//! Delivery admin console
//!
//! Browser console for operating a food-delivery marketplace: orders,
//! restaurants, users, couriers, campaigns, finances, settings, operators
//! and push notifications, all backed by a JSON HTTP API.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod app;
pub mod components;
pub mod data_view;
pub mod error_boundary;
pub mod filter;
pub mod forms;
pub mod pages;
pub mod resource;
pub mod shell;
pub mod state;
pub mod toast;

// Re-export the main entry points
pub use app::App;
pub use state::AppState;
