//! Header with income, total expenses and balance

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

fn alert_color(alert: bool) -> Color {
    if alert {
        Color::Red
    } else {
        Color::Green
    }
}

/// Render the totals header
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let over_budget = app.store.is_over_budget();
    let balance = app.store.balance();

    let figure = |label: &'static str, amount: Money, color: Color| {
        vec![
            Span::styled(label, Style::default().fg(Color::White)),
            Span::styled(
                amount.format_with_symbol(symbol),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]
    };

    let mut spans = figure(" Income: ", app.store.income(), Color::Cyan);
    spans.push(Span::raw("  │  "));
    spans.extend(figure(
        "Expenses: ",
        app.store.total_expenses(),
        alert_color(over_budget),
    ));
    spans.push(Span::raw("  │  "));
    spans.extend(figure(
        "Balance: ",
        balance,
        alert_color(balance.is_negative()),
    ));

    if over_budget {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "OVER BUDGET",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .title(" Budget Tracker ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_color() {
        assert_eq!(alert_color(true), Color::Red);
        assert_eq!(alert_color(false), Color::Green);
    }
}
