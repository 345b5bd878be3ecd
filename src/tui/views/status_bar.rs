//! Status bar view
//!
//! Shows active notifications, or key hints when there are none

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![];

    for notification in app.notifications.iter() {
        let color = notification.notification_type.color();
        spans.push(Span::styled(
            format!(" {} {} ", notification.notification_type.icon(), notification.message),
            Style::default().fg(color),
        ));
    }

    if spans.is_empty() {
        let hints = if app.focus == Focus::Transactions {
            " j/k:Move  d:Delete  i:Income  a:Add expense  Tab:Next  q:Quit "
        } else {
            " Enter:Save  Tab/Shift-Tab:Switch field  Esc:Table  Ctrl-C:Quit "
        };
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
