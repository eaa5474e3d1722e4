//! Builds one read-only render model per frame from the view state, the
//! snapshot and the wall clock.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::data::Snapshot;
use crate::domain::Directory;

use super::filter::FilterCriterion;
use super::marker::{current_time_marker, TimeMarker};
use super::paginate::{page_count, page_slice};
use super::placement::{place_all, Placement, RowKey, RowSpec};
use super::view::ViewState;
use super::window::{DayWindow, TimeWindow, ViewMode};

/// Pagination position, present only in Browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub index: usize,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub key: RowKey,
    pub label: String,
    pub day: NaiveDate,
    pub placements: Vec<Placement>,
}

/// Everything an adapter needs to draw one frame. Built fresh per render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridModel {
    pub mode: ViewMode,
    pub criterion: FilterCriterion,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub page: Option<PageInfo>,
    pub rows: Vec<GridRow>,
    pub marker: Option<TimeMarker>,
}

impl GridModel {
    pub fn placement_count(&self) -> usize {
        self.rows.iter().map(|r| r.placements.len()).sum()
    }

    pub fn placements_in_row(&self, row: usize) -> &[Placement] {
        self.rows
            .get(row)
            .map(|r| r.placements.as_slice())
            .unwrap_or(&[])
    }

    /// Placement under `x_fraction` on `row`. When placements overlap, the one
    /// drawn last (rightmost start) wins, matching what the user sees.
    pub fn placement_at(&self, row: usize, x_fraction: f64) -> Option<&Placement> {
        self.placements_in_row(row)
            .iter()
            .rev()
            .find(|p| p.geometry().contains(x_fraction))
    }

    pub fn title(&self) -> String {
        match self.mode {
            ViewMode::Browse => self.first_day.format("%A %-d %B %Y").to_string(),
            ViewMode::Search => format!(
                "Week {} – {} · {}",
                self.first_day.format("%-d %b"),
                self.last_day.format("%-d %b %Y"),
                self.criterion
            ),
        }
    }
}

fn rows_for(state: &ViewState, window: &TimeWindow, snapshot: &Snapshot) -> Vec<RowSpec> {
    match window {
        TimeWindow::Daily(day) => {
            let last = page_count(snapshot.resources.len()) - 1;
            let page = page_slice(&snapshot.resources, state.page_index.min(last));
            page.map(|p| p.items)
                .unwrap_or(&[])
                .iter()
                .map(|r| RowSpec {
                    key: RowKey::Resource(r.id.clone()),
                    label: r.tail.clone(),
                    window: *day,
                })
                .collect()
        }
        TimeWindow::Weekly(days) => days
            .iter()
            .map(|day: &DayWindow| RowSpec {
                key: RowKey::Weekday(day.weekday_offset()),
                label: day.day.format("%a %d/%m").to_string(),
                window: *day,
            })
            .collect(),
    }
}

/// Build the render model for `state` over `snapshot` at wall-clock `now`.
///
/// Pure: the same inputs always give the same model, and nothing is retained
/// between calls.
pub fn assemble(state: &ViewState, snapshot: &Snapshot, now: NaiveDateTime) -> GridModel {
    let mode = state.mode();
    let window = state.window();
    let specs = rows_for(state, &window, snapshot);
    let directory = Directory::new(&snapshot.resources, &snapshot.people);
    let placements = place_all(&specs, &snapshot.bookings, &state.criterion, &directory);

    let mut rows: Vec<GridRow> = specs
        .into_iter()
        .map(|spec| GridRow {
            key: spec.key,
            label: spec.label,
            day: spec.window.day,
            placements: Vec::new(),
        })
        .collect();
    for placement in placements {
        if let Some(row) = rows.get_mut(placement.row_index) {
            row.placements.push(placement);
        }
    }

    let page = match mode {
        ViewMode::Browse => {
            let count = page_count(snapshot.resources.len());
            Some(PageInfo {
                index: state.page_index.min(count - 1),
                count,
            })
        }
        ViewMode::Search => None,
    };

    GridModel {
        mode,
        criterion: state.criterion.clone(),
        first_day: window.first_day(),
        last_day: window.last_day(),
        page,
        rows,
        marker: current_time_marker(mode, state.reference_date, now),
    }
}
