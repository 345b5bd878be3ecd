//! Spending by category

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the category summary list
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" By Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let symbol = app.settings.currency_symbol.as_str();
    let items: Vec<ListItem> = app
        .store
        .category_totals()
        .into_iter()
        .map(|total| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<16}", total.category),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>12}", total.total.format_with_symbol(symbol)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!(" ({})", total.count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
