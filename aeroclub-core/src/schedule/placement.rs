//! Booking geometry inside the visible band, and its mapping onto a track of
//! discrete cells for text adapters.
//!
//! Daily and weekly grids go through the same code: each row is a
//! `(RowKey, DayWindow)` pair, and a booking is placed on every row whose
//! membership test it passes.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{Booking, BookingId, Directory, ResourceId};

use super::filter::FilterCriterion;
use super::labels::LabelPolicy;
use super::window::{DayWindow, BAND_HOURS};

/// What a grid row stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKey {
    /// One aircraft on the reference day (Browse).
    Resource(ResourceId),
    /// One weekday of the searched week (Search), 0 = Monday.
    Weekday(usize),
}

/// A row to lay bookings out on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpec {
    pub key: RowKey,
    pub label: String,
    pub window: DayWindow,
}

impl RowSpec {
    /// Row membership: the booking starts on this row's day and, for
    /// aircraft rows, is on this aircraft. Bookings are only ever laid out on
    /// the day they start.
    pub fn admits(&self, booking: &Booking) -> bool {
        if booking.start_day() != self.window.day {
            return false;
        }
        match &self.key {
            RowKey::Resource(id) => booking.resource_id == *id,
            RowKey::Weekday(_) => true,
        }
    }
}

/// Horizontal extent of a placement, as fractions of the band width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub left_fraction: f64,
    pub width_fraction: f64,
}

impl Geometry {
    pub fn right_fraction(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }

    pub fn contains(&self, x_fraction: f64) -> bool {
        x_fraction >= self.left_fraction && x_fraction < self.right_fraction()
    }

    pub fn overlaps(&self, other: &Geometry) -> bool {
        self.left_fraction < other.right_fraction() && other.left_fraction < self.right_fraction()
    }

    /// Cells `[start, end)` covered on a track of `cells` equal cells. Every
    /// geometry covers at least one cell so short bookings stay visible.
    pub fn cell_span(&self, cells: usize) -> (usize, usize) {
        if cells == 0 {
            return (0, 0);
        }
        let start = cell_index(self.left_fraction, cells);
        let end = ((self.right_fraction() * cells as f64).round() as usize).clamp(start + 1, cells);
        (start, end)
    }
}

/// Cell holding `fraction` on a track of `cells` cells, clamped to the last
/// cell.
pub fn cell_index(fraction: f64, cells: usize) -> usize {
    ((fraction * cells as f64).round() as usize).min(cells.saturating_sub(1))
}

/// One booking laid out on one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub booking_id: BookingId,
    pub row_index: usize,
    pub left_fraction: f64,
    pub width_fraction: f64,
    pub is_instructional: bool,
    pub primary_label: String,
    pub secondary_label: String,
}

impl Placement {
    pub fn geometry(&self) -> Geometry {
        Geometry {
            left_fraction: self.left_fraction,
            width_fraction: self.width_fraction,
        }
    }
}

/// Clamp a `[start, end)` interval given in hours from 06:00 to the band
/// `[0, BAND_HOURS]`. Idempotent.
pub fn clip_to_band(start_hours: f64, end_hours: f64) -> (f64, f64) {
    (
        start_hours.clamp(0.0, BAND_HOURS),
        end_hours.clamp(0.0, BAND_HOURS),
    )
}

/// Geometry of `booking` within `window`, or `None` if nothing of it is
/// visible. Malformed bookings (`end <= start`) have no visible duration and
/// are dropped the same way.
pub fn place_booking(booking: &Booking, window: &DayWindow) -> Option<Geometry> {
    let raw_start = window.hours_from_band_start(booking.start);
    let raw_end = window.hours_from_band_start(booking.end);
    let (visible_start, visible_end) = clip_to_band(raw_start, raw_end);
    let duration = (visible_end - visible_start).max(0.0);
    if duration <= 0.0 {
        trace!(
            booking = %booking.id,
            day = %window.day,
            raw_start,
            raw_end,
            "booking outside visible band, dropped"
        );
        return None;
    }
    Some(Geometry {
        left_fraction: visible_start / BAND_HOURS,
        width_fraction: duration / BAND_HOURS,
    })
}

/// Lay out every booking that passes `criterion` on every row that admits it.
///
/// No overlap resolution: two bookings overlapping on one row are both
/// emitted with overlapping extents. Output is ordered by row, then by left
/// edge, then by booking id.
pub fn place_all(
    rows: &[RowSpec],
    bookings: &[Booking],
    criterion: &FilterCriterion,
    directory: &Directory<'_>,
) -> Vec<Placement> {
    let policy = LabelPolicy::for_kind(criterion.kind);
    let candidates: Vec<&Booking> = bookings
        .iter()
        .filter(|b| criterion.matches(b, directory))
        .collect();

    let mut placements = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        for booking in candidates.iter().filter(|b| row.admits(b)) {
            let Some(geometry) = place_booking(booking, &row.window) else {
                continue;
            };
            let (primary_label, secondary_label) = policy.labels(booking, directory);
            placements.push(Placement {
                booking_id: booking.id.clone(),
                row_index,
                left_fraction: geometry.left_fraction,
                width_fraction: geometry.width_fraction,
                is_instructional: booking.is_instructional(),
                primary_label,
                secondary_label,
            });
        }
    }
    placements.sort_by(|a, b| {
        a.row_index
            .cmp(&b.row_index)
            .then(a.left_fraction.total_cmp(&b.left_fraction))
            .then_with(|| a.booking_id.cmp(&b.booking_id))
    });
    placements
}
