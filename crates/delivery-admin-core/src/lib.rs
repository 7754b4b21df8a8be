//! Core types and utilities for the delivery admin console
//!
//! Everything here is independent of the browser: the records the backend
//! sends, the error taxonomy, configuration loading and display formatting.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use types::{
    Ad, Admin, DashboardMetrics, Deliverer, Notification, NotificationDetail, Order, Promotion,
    Restaurant, TargetType, Transaction, User, WeeklyPoint,
};
