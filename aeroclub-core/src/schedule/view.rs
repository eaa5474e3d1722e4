//! View state machine — the externally owned `(reference date, criterion,
//! page)` triple and the transitions the UI drives it through.
//!
//! Browse ↔ Search is decided solely by the criterion kind. The resource page
//! is frozen while searching, so clearing the filter lands back on the page
//! the user left.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filter::FilterCriterion;
use super::paginate::{is_valid_page, page_count};
use super::window::{is_renderable, resolve_window, week_start, TimeWindow, ViewMode};

/// Date navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    /// One step back: a day in Browse, a week in Search.
    Back,
    /// One step forward: a day in Browse, a week in Search.
    Forward,
    /// Jump to today.
    Today,
    /// Jump to the Monday of the current week.
    ThisWeek,
}

/// State-mutation entry points invoked by UI controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleEvent {
    Navigate(NavAction),
    FilterChanged(FilterCriterion),
    FilterCleared,
    PageChanged(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub reference_date: NaiveDate,
    pub criterion: FilterCriterion,
    pub page_index: usize,
}

impl ViewState {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            criterion: FilterCriterion::none(),
            page_index: 0,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.criterion.mode()
    }

    pub fn window(&self) -> TimeWindow {
        resolve_window(self.mode(), self.reference_date)
    }

    /// Days moved by one Back/Forward step.
    pub fn step_days(&self) -> u64 {
        match self.mode() {
            ViewMode::Browse => 1,
            ViewMode::Search => 7,
        }
    }

    /// Move the reference date. Returns false when nothing changed: already
    /// there, or the target is too close to a calendar end to render.
    pub fn navigate(&mut self, action: NavAction, today: NaiveDate) -> bool {
        let step = Days::new(self.step_days());
        let target = match action {
            NavAction::Back => self.reference_date.checked_sub_days(step),
            NavAction::Forward => self.reference_date.checked_add_days(step),
            NavAction::Today => Some(today),
            NavAction::ThisWeek => Some(week_start(today)),
        };
        match target.filter(|d| is_renderable(*d)) {
            Some(date) if date != self.reference_date => {
                debug!(from = %self.reference_date, to = %date, ?action, "navigate");
                self.reference_date = date;
                true
            }
            _ => false,
        }
    }

    /// Select a criterion. A non-`None` criterion enters Search; `None`
    /// behaves like [`ViewState::clear_filter`].
    pub fn apply_filter(&mut self, criterion: FilterCriterion) -> bool {
        if criterion == self.criterion {
            return false;
        }
        let before = self.mode();
        self.criterion = criterion;
        debug!(
            from = before.label(),
            to = self.mode().label(),
            criterion = %self.criterion,
            "filter changed"
        );
        true
    }

    /// Drop the criterion and return to Browse on the page that was active
    /// before searching.
    pub fn clear_filter(&mut self) -> bool {
        self.apply_filter(FilterCriterion::none())
    }

    /// Jump to a page. Only meaningful in Browse; out-of-range pages and any
    /// page change while searching are no-ops.
    pub fn set_page(&mut self, page_index: usize, resource_count: usize) -> bool {
        if self.mode() != ViewMode::Browse
            || page_index == self.page_index
            || !is_valid_page(page_index, resource_count)
        {
            return false;
        }
        self.page_index = page_index;
        true
    }

    pub fn next_page(&mut self, resource_count: usize) -> bool {
        self.set_page(self.page_index + 1, resource_count)
    }

    pub fn prev_page(&mut self, resource_count: usize) -> bool {
        match self.page_index.checked_sub(1) {
            Some(p) => self.set_page(p, resource_count),
            None => false,
        }
    }

    /// Pull the page back into range after the fleet shrank.
    pub fn clamp_page(&mut self, resource_count: usize) {
        let last = page_count(resource_count) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }

    /// Dispatch a UI event. Returns whether the state changed.
    pub fn apply(&mut self, event: ScheduleEvent, resource_count: usize, today: NaiveDate) -> bool {
        match event {
            ScheduleEvent::Navigate(action) => self.navigate(action, today),
            ScheduleEvent::FilterChanged(criterion) => self.apply_filter(criterion),
            ScheduleEvent::FilterCleared => self.clear_filter(),
            ScheduleEvent::PageChanged(index) => self.set_page(index, resource_count),
        }
    }
}
