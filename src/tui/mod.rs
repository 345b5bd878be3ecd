//! Terminal User Interface module
//!
//! An interactive single-screen interface built on ratatui: totals header,
//! input row for income and expenses, transaction table with delete,
//! spending by category, and self-hiding notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
