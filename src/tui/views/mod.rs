//! TUI Views module
//!
//! The single screen: totals header, input row, transaction table,
//! category summary and status bar.

pub mod categories;
pub mod form;
pub mod overview;
pub mod register;
pub mod status_bar;

use ratatui::Frame;

use crate::storage::KeyValueStore;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());

    overview::render(frame, app, layout.header);
    form::render(frame, app, layout.inputs);
    register::render(frame, app, layout.transactions);
    categories::render(frame, app, layout.categories);
    status_bar::render(frame, app, layout.status_bar);
}
