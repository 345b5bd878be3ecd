//! Layout definitions for the TUI
//!
//! Header with the totals, the input row, the transaction table beside the
//! category summary, and the notification line at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Income, total expenses and balance
    pub header: Rect,
    /// Income, category, amount and date fields
    pub inputs: Rect,
    /// Transaction table
    pub transactions: Rect,
    /// Spending by category
    pub categories: Rect,
    /// Notifications and key hints
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Inputs
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            inputs: vertical[1],
            transactions: body[0],
            categories: body[1],
            status_bar: vertical[3],
        }
    }
}

/// The four input fields, side by side
pub struct InputRowLayout {
    pub income: Rect,
    pub category: Rect,
    pub amount: Rect,
    pub date: Rect,
}

impl InputRowLayout {
    /// Split the inner area of the input block
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(22),
                Constraint::Percentage(30),
                Constraint::Percentage(22),
                Constraint::Percentage(26),
            ])
            .split(area);

        Self {
            income: chunks[0],
            category: chunks[1],
            amount: chunks[2],
            date: chunks[3],
        }
    }
}
