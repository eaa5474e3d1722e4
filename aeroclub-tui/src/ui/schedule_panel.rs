//! Schedule grid — hour axis, one line per row, bookings as coloured bars.
//!
//! Fractions from the engine are mapped onto terminal columns with
//! [`Geometry::cell_span`](aeroclub_core::schedule::Geometry::cell_span). The
//! cell layout is kept separate from drawing so it can be tested without a
//! terminal.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use aeroclub_core::schedule::{
    cell_index, Placement, BAND_HOURS, VISIBLE_END_HOUR, VISIBLE_START_HOUR,
};
use aeroclub_core::GridModel;

use crate::app::GridCursor;
use crate::theme;

/// Columns reserved for row labels (tail or weekday), separator included.
pub const LABEL_WIDTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    HourTick,
    Marker,
    Booking { index: usize, instructional: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub kind: CellKind,
}

impl Cell {
    const EMPTY: Cell = Cell {
        ch: ' ',
        kind: CellKind::Empty,
    };
}

/// Text written inside a bar of `width` columns.
pub fn bar_text(placement: &Placement, width: usize) -> String {
    let label = match (
        placement.primary_label.is_empty(),
        placement.secondary_label.is_empty(),
    ) {
        (_, true) => placement.primary_label.clone(),
        (true, false) => placement.secondary_label.clone(),
        (false, false) => format!(
            "{} · {}",
            placement.primary_label, placement.secondary_label
        ),
    };
    let mut text: String = label.chars().take(width).collect();
    let len = text.chars().count();
    text.extend(std::iter::repeat(' ').take(width - len));
    text
}

/// Lay one row out over `track` columns. Later placements are drawn on top
/// of earlier ones; the marker only shows through empty cells.
pub fn layout_row(placements: &[Placement], marker: Option<f64>, track: usize) -> Vec<Cell> {
    let mut cells = vec![Cell::EMPTY; track];
    if track == 0 {
        return cells;
    }

    for hour in (VISIBLE_START_HOUR + 1)..VISIBLE_END_HOUR {
        let col = cell_index(f64::from(hour - VISIBLE_START_HOUR) / BAND_HOURS, track);
        cells[col] = Cell {
            ch: '·',
            kind: CellKind::HourTick,
        };
    }

    for (index, p) in placements.iter().enumerate() {
        let (start, end) = p.geometry().cell_span(track);
        let kind = CellKind::Booking {
            index,
            instructional: p.is_instructional,
        };
        for (offset, ch) in bar_text(p, end - start).chars().enumerate() {
            cells[start + offset] = Cell { ch, kind };
        }
    }

    if let Some(x) = marker {
        let cell = &mut cells[cell_index(x, track)];
        if !matches!(cell.kind, CellKind::Booking { .. }) {
            *cell = Cell {
                ch: '│',
                kind: CellKind::Marker,
            };
        }
    }
    cells
}

/// Hour labels every two hours, 06 through 22.
pub fn hour_axis(track: usize) -> String {
    let mut axis = vec![' '; track];
    let mut next_free = 0;
    for hour in (VISIBLE_START_HOUR..=VISIBLE_END_HOUR).step_by(2) {
        let fraction = f64::from(hour - VISIBLE_START_HOUR) / BAND_HOURS;
        let col = cell_index(fraction, track).min(track.saturating_sub(2));
        if col < next_free || col + 2 > track {
            continue;
        }
        for (i, ch) in format!("{hour:02}").chars().enumerate() {
            axis[col + i] = ch;
        }
        next_free = col + 3;
    }
    axis.into_iter().collect()
}

fn pad_label(label: &str) -> String {
    let width = LABEL_WIDTH - 1;
    let mut text: String = label.chars().take(width).collect();
    let len = text.chars().count();
    text.extend(std::iter::repeat(' ').take(width - len));
    text.push(' ');
    text
}

fn cell_style(kind: CellKind, selected: Option<usize>) -> Style {
    match kind {
        CellKind::Empty => Style::default(),
        CellKind::HourTick => theme::muted(),
        CellKind::Marker => theme::marker(),
        CellKind::Booking {
            index,
            instructional,
        } => theme::booking(instructional, selected == Some(index)),
    }
}

/// Group runs of identically styled cells into spans.
fn row_spans(cells: &[Cell], selected: Option<usize>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_kind: Option<CellKind> = None;
    for cell in cells {
        if run_kind.is_some_and(|k| k != cell.kind) {
            if let Some(kind) = run_kind {
                spans.push(Span::styled(std::mem::take(&mut run), cell_style(kind, selected)));
            }
        }
        run_kind = Some(cell.kind);
        run.push(cell.ch);
    }
    if let Some(kind) = run_kind {
        spans.push(Span::styled(run, cell_style(kind, selected)));
    }
    spans
}

pub fn render(f: &mut Frame, area: Rect, grid: &GridModel, cursor: GridCursor) {
    let track = (area.width as usize).saturating_sub(LABEL_WIDTH);
    let marker = grid.marker.map(|m| m.x_fraction);

    let mut lines: Vec<Line> = Vec::with_capacity(grid.rows.len() + 2);
    lines.push(Line::from(vec![
        Span::raw(pad_label("")),
        Span::styled(hour_axis(track), theme::muted()),
    ]));

    if grid.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No aircraft in the fleet.",
            theme::muted(),
        )));
    }

    for (i, row) in grid.rows.iter().enumerate() {
        let is_cursor = i == cursor.row;
        let selected = if is_cursor { cursor.placement } else { None };
        let mut spans = vec![Span::styled(pad_label(&row.label), theme::row_label(is_cursor))];
        spans.extend(row_spans(
            &layout_row(&row.placements, marker, track),
            selected,
        ));
        lines.push(Line::from(spans));
    }

    if grid.placement_count() == 0 && !grid.rows.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  No bookings in this window.",
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
