//! Reusable view components

pub mod data_table;
pub mod fields;
pub mod loading;
pub mod metric_card;
pub mod modal;
pub mod summary_cards;
pub mod toast_host;
