//! Header — date or week title, mode, page position and active filter.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use aeroclub_core::GridModel;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, grid: &GridModel) {
    let mut meta = vec![
        Span::styled(" Mode: ", theme::muted()),
        Span::styled(grid.mode.label(), theme::accent()),
    ];
    if let Some(page) = grid.page {
        meta.push(Span::styled("  Page: ", theme::muted()));
        meta.push(Span::styled(
            format!("{}/{}", page.index + 1, page.count),
            theme::accent(),
        ));
    }
    meta.push(Span::styled("  Filter: ", theme::muted()));
    meta.push(Span::styled(grid.criterion.to_string(), theme::text()));

    let lines = vec![
        Line::from(Span::styled(format!(" {}", grid.title()), theme::accent_bold())),
        Line::from(meta),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
