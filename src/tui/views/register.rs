//! Transaction table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::format_date;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};

/// Render the transaction table
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let is_focused = app.focus == Focus::Transactions;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Transactions ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let transactions = app.store.transactions();
    if transactions.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the fields above and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(12),    // Category
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let amount_color = if app.store.is_over_budget() {
        Color::Red
    } else {
        Color::White
    };

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            Row::new(vec![
                Cell::from(format_date(txn.date, &app.settings.date_format)),
                Cell::from(truncate_string(&txn.category, 30)),
                Cell::from(txn.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_transaction_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 1).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Food", 10), "Food");
        assert_eq!(truncate_string("Groceries", 5), "Groc…");
        assert_eq!(truncate_string("Café au lait", 5), "Café…");
    }
}
