//! Where "now" sits on today's daily grid.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::window::{ViewMode, BAND_HOURS, VISIBLE_START_HOUR};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeMarker {
    pub x_fraction: f64,
}

/// Marker for `now`, present only in Browse mode, only when the reference
/// date is today, and only while the time of day is inside 06:00–22:00
/// (both edges included).
///
/// `now` is supplied by the caller on every render; nothing is cached.
pub fn current_time_marker(
    mode: ViewMode,
    reference_date: NaiveDate,
    now: NaiveDateTime,
) -> Option<TimeMarker> {
    if mode != ViewMode::Browse || reference_date != now.date() {
        return None;
    }
    let hours = f64::from(now.hour()) + f64::from(now.minute()) / 60.0;
    let from_band_start = hours - f64::from(VISIBLE_START_HOUR);
    if (0.0..=BAND_HOURS).contains(&from_band_start) {
        Some(TimeMarker {
            x_fraction: from_band_start / BAND_HOURS,
        })
    } else {
        None
    }
}
