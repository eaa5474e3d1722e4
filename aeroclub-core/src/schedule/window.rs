//! Which calendar days are on screen, and the fixed 06:00–22:00 band inside
//! each of them.
//!
//! Dates within a week of either end of the calendar are pulled inward before
//! a window is built, so every window resolves without overflowing.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// First visible hour of the band (inclusive).
pub const VISIBLE_START_HOUR: u32 = 6;
/// Last visible hour of the band (exclusive edge of the grid).
pub const VISIBLE_END_HOUR: u32 = 22;
/// Width of the band in hours.
pub const BAND_HOURS: f64 = (VISIBLE_END_HOUR - VISIBLE_START_HOUR) as f64;

/// Browse shows one day of paginated aircraft; Search shows one week of
/// filtered bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    Browse,
    Search,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Browse => "Daily",
            ViewMode::Search => "Weekly",
        }
    }
}

/// One calendar day with its visible band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub day: NaiveDate,
    pub day_start: NaiveDateTime,
    pub day_end: NaiveDateTime,
}

impl DayWindow {
    pub fn new(day: NaiveDate) -> Self {
        let day_start = day.and_time(NaiveTime::MIN);
        Self {
            day,
            day_start,
            day_end: day_start
                .checked_add_signed(Duration::days(1))
                .unwrap_or(NaiveDateTime::MAX),
        }
    }

    /// 06:00 on this day.
    pub fn band_start(&self) -> NaiveDateTime {
        self.day_start + Duration::hours(i64::from(VISIBLE_START_HOUR))
    }

    /// 22:00 on this day.
    pub fn band_end(&self) -> NaiveDateTime {
        self.day_start + Duration::hours(i64::from(VISIBLE_END_HOUR))
    }

    /// Hours from the band start to `t`; negative before 06:00.
    pub fn hours_from_band_start(&self, t: NaiveDateTime) -> f64 {
        (t - self.band_start()).num_seconds() as f64 / 3600.0
    }

    /// Offset from Monday, 0..=6.
    pub fn weekday_offset(&self) -> usize {
        self.day.weekday().num_days_from_monday() as usize
    }
}

/// Resolved window for a render pass: a single day (Browse) or the seven
/// Monday-anchored days of a week (Search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    Daily(DayWindow),
    Weekly([DayWindow; 7]),
}

impl TimeWindow {
    pub fn days(&self) -> &[DayWindow] {
        match self {
            TimeWindow::Daily(day) => std::slice::from_ref(day),
            TimeWindow::Weekly(days) => days,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.days()[0].day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days()[self.days().len() - 1].day
    }
}

/// Days kept clear of each end of the calendar.
const CALENDAR_MARGIN_DAYS: u64 = 7;

/// Whether a full week around `date` exists in the calendar, so both a
/// daily and a weekly window can be built for it.
pub fn is_renderable(date: NaiveDate) -> bool {
    let margin = Days::new(CALENDAR_MARGIN_DAYS);
    date.checked_sub_days(margin).is_some() && date.checked_add_days(margin).is_some()
}

/// `date`, or the nearest renderable date when it sits at a calendar edge.
pub fn clamp_renderable(date: NaiveDate) -> NaiveDate {
    if is_renderable(date) {
        return date;
    }
    let margin = Days::new(CALENDAR_MARGIN_DAYS);
    let edge = if date.year() < 0 {
        NaiveDate::MIN.checked_add_days(margin)
    } else {
        NaiveDate::MAX.checked_sub_days(margin)
    };
    edge.unwrap_or(date)
}

/// Monday of the week containing `date`. Saturates at the start of the
/// calendar.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(back).unwrap_or(NaiveDate::MIN)
}

/// Resolve the window for a mode and reference date. Pure.
pub fn resolve_window(mode: ViewMode, reference_date: NaiveDate) -> TimeWindow {
    let reference = clamp_renderable(reference_date);
    match mode {
        ViewMode::Browse => TimeWindow::Daily(DayWindow::new(reference)),
        ViewMode::Search => {
            let monday = week_start(reference);
            TimeWindow::Weekly(std::array::from_fn(|i| {
                let day = monday
                    .checked_add_days(Days::new(i as u64))
                    .unwrap_or(NaiveDate::MAX);
                DayWindow::new(day)
            }))
        }
    }
}
