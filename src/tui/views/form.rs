//! Input row: income, category, amount and date fields

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};
use crate::tui::layout::InputRowLayout;

/// Render the input row
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let editing = app.focus != Focus::Transactions;
    let border_color = if editing { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Enter: save  Tab: next field  Esc: table ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = InputRowLayout::new(inner);
    frame.render_widget(&app.income_input, fields.income);
    frame.render_widget(&app.category_input, fields.category);
    frame.render_widget(&app.amount_input, fields.amount);
    frame.render_widget(&app.date_input, fields.date);
}
