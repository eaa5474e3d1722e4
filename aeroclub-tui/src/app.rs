//! Application state — single-owner, main-thread only.
//!
//! The schedule itself is never cached here: every frame re-assembles a
//! [`GridModel`] from the view triple, the snapshot and the wall clock.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use aeroclub_core::domain::BookingId;
use aeroclub_core::schedule::{
    suggest, NavAction, Placement, ScheduleEvent, Suggestion, ViewMode,
};
use aeroclub_core::{assemble, ConsoleConfig, GridModel, Snapshot, ViewState};

/// Popups drawn over the schedule. Only one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
    Search,
    Booking(BookingId),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Row cursor plus the placement picked with Tab inside that row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub row: usize,
    pub placement: Option<usize>,
}

/// Search overlay: typed query and the live suggestion list.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub input: String,
    pub suggestions: Vec<Suggestion>,
    pub cursor: usize,
}

impl SearchState {
    pub fn selected(&self) -> Option<&Suggestion> {
        self.suggestions.get(self.cursor)
    }
}

pub struct AppState {
    pub running: bool,
    pub config: ConsoleConfig,
    pub snapshot: Snapshot,
    pub view: ViewState,
    pub cursor: GridCursor,
    pub overlay: Overlay,
    pub search: SearchState,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(config: ConsoleConfig, snapshot: Snapshot, today: NaiveDate) -> Self {
        Self {
            running: true,
            config,
            snapshot,
            view: ViewState::new(today),
            cursor: GridCursor::default(),
            overlay: Overlay::Welcome,
            search: SearchState::default(),
            status_message: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    /// Render model for this instant.
    pub fn grid(&self, now: NaiveDateTime) -> GridModel {
        assemble(&self.view, &self.snapshot, now)
    }

    /// Forward a UI event to the view state. Any change resets the
    /// placement selection, since the rows it referred to are gone.
    pub fn dispatch(&mut self, event: ScheduleEvent, today: NaiveDate) -> bool {
        let changed = self
            .view
            .apply(event, self.snapshot.resources.len(), today);
        if changed {
            self.cursor.placement = None;
        }
        changed
    }

    pub fn navigate(&mut self, action: NavAction, today: NaiveDate) {
        if self.dispatch(ScheduleEvent::Navigate(action), today) {
            self.status_message = None;
        }
    }

    /// Step the resource page by `delta`. Pages only exist in Browse.
    pub fn step_page(&mut self, delta: isize, today: NaiveDate) {
        if self.mode() == ViewMode::Search {
            self.set_warning("Pages are frozen while a filter is active");
            return;
        }
        let Some(target) = self.view.page_index.checked_add_signed(delta) else {
            return;
        };
        if self.dispatch(ScheduleEvent::PageChanged(target), today) {
            self.cursor.row = 0;
        }
    }

    pub fn move_row(&mut self, delta: isize, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let row = self.cursor.row.saturating_add_signed(delta).min(row_count - 1);
        if row != self.cursor.row {
            self.cursor = GridCursor {
                row,
                placement: None,
            };
        }
    }

    /// Tab through the placements of the cursor row, wrapping back to none.
    pub fn cycle_placement(&mut self, grid: &GridModel) {
        let count = grid.placements_in_row(self.cursor.row).len();
        self.cursor.placement = match self.cursor.placement {
            _ if count == 0 => None,
            None => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            Some(_) => None,
        };
    }

    /// Keep the cursor inside the grid after rows or placements changed.
    pub fn sync_cursor(&mut self, grid: &GridModel) {
        let rows = grid.rows.len();
        if rows == 0 {
            self.cursor = GridCursor::default();
            return;
        }
        if self.cursor.row >= rows {
            self.cursor.row = rows - 1;
            self.cursor.placement = None;
        }
        let count = grid.placements_in_row(self.cursor.row).len();
        if self.cursor.placement.is_some_and(|i| i >= count) {
            self.cursor.placement = None;
        }
    }

    pub fn selected_placement<'g>(&self, grid: &'g GridModel) -> Option<&'g Placement> {
        let idx = self.cursor.placement?;
        grid.placements_in_row(self.cursor.row).get(idx)
    }

    /// Hand the selected booking to the details overlay.
    pub fn activate_selected(&mut self, grid: &GridModel) {
        match self.selected_placement(grid) {
            Some(p) => {
                info!(booking = %p.booking_id, "open booking details");
                self.overlay = Overlay::Booking(p.booking_id.clone());
            }
            None => self.set_warning("No booking selected (Tab picks one)"),
        }
    }

    pub fn open_search(&mut self) {
        self.search = SearchState::default();
        self.overlay = Overlay::Search;
    }

    /// Recompute suggestions for the current query.
    pub fn refresh_suggestions(&mut self) {
        self.search.suggestions = suggest(
            &self.search.input,
            &self.snapshot.resources,
            &self.snapshot.people,
            Some(self.config.suggestion_limit),
        );
        self.search.cursor = 0;
    }

    pub fn move_suggestion(&mut self, delta: isize) {
        let count = self.search.suggestions.len();
        if count == 0 {
            return;
        }
        self.search.cursor = self
            .search
            .cursor
            .saturating_add_signed(delta)
            .min(count - 1);
    }

    /// Apply the highlighted suggestion as the filter and close the overlay.
    pub fn accept_suggestion(&mut self, today: NaiveDate) {
        let Some(suggestion) = self.search.selected().cloned() else {
            self.set_warning("No match to apply");
            return;
        };
        let criterion = suggestion.criterion();
        self.overlay = Overlay::None;
        self.search = SearchState::default();
        if self.dispatch(ScheduleEvent::FilterChanged(criterion.clone()), today) {
            self.cursor.row = 0;
            self.set_status(format!("Showing week for {criterion}"));
        }
    }

    pub fn clear_filter(&mut self, today: NaiveDate) {
        if self.dispatch(ScheduleEvent::FilterCleared, today) {
            self.cursor.row = 0;
            self.set_status("Filter cleared");
        }
    }

    /// Re-read the configured data source. The current snapshot is kept
    /// when loading fails.
    pub fn reload(&mut self, today: NaiveDate) {
        match self.config.load_snapshot(today) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.view.clamp_page(self.snapshot.resources.len());
                self.cursor.placement = None;
                self.set_status(format!(
                    "Reloaded {} aircraft, {} bookings",
                    self.snapshot.resources.len(),
                    self.snapshot.bookings.len()
                ));
            }
            Err(e) => self.push_error(format!("Reload failed: {e}")),
        }
    }

    /// Log an error and surface it in the status bar.
    pub fn push_error(&mut self, message: String) {
        warn!(%message, "console error");
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
