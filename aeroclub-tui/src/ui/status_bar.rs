//! Bottom status bar — key hints, booking count, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use aeroclub_core::schedule::ViewMode;
use aeroclub_core::GridModel;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, grid: &GridModel) {
    let hints = match grid.mode {
        ViewMode::Browse => " h/l:day [/]:page j/k:row Tab:pick Enter:open /:search ?:help q:quit",
        ViewMode::Search => " h/l:week j/k:row Tab:pick Enter:open /:search Esc:clear ?:help q:quit",
    };
    let mut spans = vec![
        Span::styled(hints, theme::muted()),
        Span::raw(" | "),
        Span::styled(format!("{} bookings", grid.placement_count()), theme::text()),
    ];

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
