//! Screens of the console, one per navigation section

pub mod admins;
pub mod ads;
pub mod dashboard;
pub mod deliverers;
pub mod financial;
pub mod fixtures;
pub mod notifications;
pub mod orders;
pub mod promotions;
pub mod resource_screen;
pub mod restaurants;
pub mod settings;
pub mod users;
