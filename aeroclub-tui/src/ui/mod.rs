//! Top-level UI layout — header, schedule grid, status bar, overlays.

pub mod header;
pub mod overlays;
pub mod schedule_panel;
pub mod status_bar;

use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI for wall-clock `now`.
pub fn draw(f: &mut Frame, app: &AppState, now: NaiveDateTime) {
    let grid = app.grid(now);

    // Split: 2-line header + grid + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::render(f, chunks[0], &grid);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(app.overlay == Overlay::None))
        .title(format!(" {} ", grid.mode.label()))
        .title_style(theme::panel_title(app.overlay == Overlay::None));
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);
    schedule_panel::render(f, inner, &grid, app.cursor);

    status_bar::render(f, chunks[2], app, &grid);

    let main_area = chunks[1];
    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::Search => overlays::render_search(f, main_area, &app.search),
        Overlay::Booking(id) => overlays::render_booking(f, main_area, &app.snapshot, id),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
