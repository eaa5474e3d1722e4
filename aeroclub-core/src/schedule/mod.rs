//! Booking schedule layout engine.
//!
//! Turns `(aircraft × time window × bookings × filter)` into a renderable
//! grid. Everything here is synchronous and side-effect free; the only state
//! is the [`ViewState`] triple owned by the caller.

pub mod filter;
pub mod grid;
pub mod labels;
pub mod marker;
pub mod paginate;
pub mod placement;
pub mod view;
pub mod window;

pub use filter::{suggest, FilterCriterion, FilterKind, Suggestion};
pub use grid::{assemble, GridModel, GridRow, PageInfo};
pub use labels::{LabelField, LabelPolicy};
pub use marker::{current_time_marker, TimeMarker};
pub use paginate::{page_count, page_slice, ResourcePage, PAGE_SIZE};
pub use placement::{
    cell_index, clip_to_band, place_all, place_booking, Geometry, Placement, RowKey, RowSpec,
};
pub use view::{NavAction, ScheduleEvent, ViewState};
pub use window::{
    clamp_renderable, is_renderable, resolve_window, week_start, DayWindow, TimeWindow, ViewMode,
    BAND_HOURS, VISIBLE_END_HOUR, VISIBLE_START_HOUR,
};
