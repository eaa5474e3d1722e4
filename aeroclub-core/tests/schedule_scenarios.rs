//! BDD scenarios for the booking schedule layout engine.
//!
//! Each scenario builds a small club, drives the view state the way the UI
//! would, and checks the assembled grid.

use chrono::{NaiveDate, NaiveDateTime};

use aeroclub_core::domain::{Booking, Person, Resource, Role};
use aeroclub_core::schedule::{
    assemble, FilterCriterion, NavAction, RowKey, ScheduleEvent, ViewMode, ViewState,
};
use aeroclub_core::Snapshot;

// ── Helpers ──────────────────────────────────────────────────────────

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
}

fn at(day: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    day.and_hms_opt(h, m, 0).unwrap()
}

fn fleet(n: usize) -> Vec<Resource> {
    (0..n)
        .map(|i| Resource::new(format!("r{i}"), format!("F-G{i:03}")))
        .collect()
}

fn people() -> Vec<Person> {
    vec![
        Person::new("p1", "John", "Smith", Role::Student),
        Person::new("p2", "Jane", "Doe", Role::Instructor),
        Person::new("p3", "Camille", "Martin", Role::Pilot),
    ]
}

fn club(bookings: Vec<Booking>) -> Snapshot {
    Snapshot {
        resources: fleet(17),
        people: people(),
        bookings,
    }
}

fn noon(day: NaiveDate) -> NaiveDateTime {
    at(day, 12, 0)
}

// ── Geometry scenarios ───────────────────────────────────────────────

#[test]
fn bdd_scenario_morning_booking_geometry() {
    // GIVEN a booking from 09:00 to 11:30 on the first aircraft
    let snap = club(vec![Booking::new(
        "b1",
        "r0",
        "p1",
        at(monday(), 9, 0),
        at(monday(), 11, 30),
    )]);

    // WHEN the daily grid for that day is assembled
    let grid = assemble(&ViewState::new(monday()), &snap, noon(monday()));

    // THEN it starts 3/16 into the band and spans 2.5/16 of it
    let p = &grid.rows[0].placements[0];
    assert_eq!(p.left_fraction, 0.1875);
    assert_eq!(p.width_fraction, 0.15625);
}

#[test]
fn bdd_scenario_evening_booking_clipped_at_band_end() {
    // GIVEN a booking from 21:00 to 23:00
    let snap = club(vec![Booking::new(
        "b1",
        "r0",
        "p1",
        at(monday(), 21, 0),
        at(monday(), 23, 0),
    )]);

    // WHEN assembled
    let grid = assemble(&ViewState::new(monday()), &snap, noon(monday()));

    // THEN only the hour up to 22:00 is visible
    let p = &grid.rows[0].placements[0];
    assert_eq!(p.width_fraction, 0.0625);
    assert_eq!(p.left_fraction + p.width_fraction, 1.0);
}

#[test]
fn bdd_scenario_booking_after_band_is_dropped() {
    // GIVEN a booking from 23:00 to 23:30 and one at dawn before 06:00
    let snap = club(vec![
        Booking::new("late", "r0", "p1", at(monday(), 23, 0), at(monday(), 23, 30)),
        Booking::new("dawn", "r0", "p1", at(monday(), 4, 0), at(monday(), 5, 45)),
    ]);

    // WHEN assembled
    let grid = assemble(&ViewState::new(monday()), &snap, noon(monday()));

    // THEN nothing is placed
    assert_eq!(grid.placement_count(), 0);
}

#[test]
fn bdd_scenario_malformed_booking_does_not_break_render() {
    // GIVEN a booking whose end precedes its start, next to a good one
    let snap = club(vec![
        Booking::new("bad", "r0", "p1", at(monday(), 11, 0), at(monday(), 9, 0)),
        Booking::new("good", "r1", "p1", at(monday(), 9, 0), at(monday(), 10, 0)),
    ]);

    // WHEN assembled
    let grid = assemble(&ViewState::new(monday()), &snap, noon(monday()));

    // THEN the bad one is silently dropped and the good one renders
    assert_eq!(grid.placement_count(), 1);
    assert_eq!(grid.rows[1].placements[0].booking_id.as_str(), "good");
}

#[test]
fn bdd_scenario_overlapping_bookings_both_emitted() {
    // GIVEN two overlapping bookings on the same aircraft
    let snap = club(vec![
        Booking::new("a", "r0", "p1", at(monday(), 9, 0), at(monday(), 11, 0)),
        Booking::new("b", "r0", "p3", at(monday(), 10, 0), at(monday(), 12, 0)),
    ]);

    // WHEN assembled
    let grid = assemble(&ViewState::new(monday()), &snap, noon(monday()));

    // THEN both appear on the same row with overlapping extents, unstacked
    let row = &grid.rows[0].placements;
    assert_eq!(row.len(), 2);
    assert!(row[0].geometry().overlaps(&row[1].geometry()));
    assert_eq!(row[0].row_index, row[1].row_index);
}

#[test]
fn bdd_scenario_overnight_booking_only_on_start_day() {
    // GIVEN a booking from Monday 20:00 to Tuesday 10:00
    let tuesday = monday().succ_opt().unwrap();
    let snap = club(vec![Booking::new(
        "ferry",
        "r0",
        "p1",
        at(monday(), 20, 0),
        at(tuesday, 10, 0),
    )]);

    // WHEN Monday and Tuesday are assembled
    let mut state = ViewState::new(monday());
    let mon = assemble(&state, &snap, noon(monday()));
    state.navigate(NavAction::Forward, monday());
    let tue = assemble(&state, &snap, noon(monday()));

    // THEN it shows on Monday, clipped at 22:00, and not at all on Tuesday
    assert_eq!(mon.placement_count(), 1);
    assert_eq!(mon.rows[0].placements[0].width_fraction, 2.0 / 16.0);
    assert_eq!(tue.placement_count(), 0);
}

// ── Filter & label scenarios ─────────────────────────────────────────

#[test]
fn bdd_scenario_instructor_search_labels() {
    // GIVEN a lesson where Jane Doe instructs John Smith on F-G004
    let snap = club(vec![Booking::new(
        "lesson",
        "r4",
        "p1",
        at(monday(), 9, 0),
        at(monday(), 10, 0),
    )
    .with_instructor("p2")]);

    // WHEN the user searches for instructor Jane Doe
    let mut state = ViewState::new(monday());
    state.apply_filter(FilterCriterion::instructor("Jane Doe"));
    let grid = assemble(&state, &snap, noon(monday()));

    // THEN the placement shows the tail first and the student second
    let p = &grid.rows[0].placements[0];
    assert_eq!(p.primary_label, "F-G004");
    assert_eq!(p.secondary_label, "John Smith");
    assert!(p.is_instructional);
}

#[test]
fn bdd_scenario_person_search_filters_week() {
    // GIVEN bookings for two pilots across the week
    let wednesday = monday() + chrono::Duration::days(2);
    let snap = club(vec![
        Booking::new("j1", "r0", "p1", at(monday(), 9, 0), at(monday(), 10, 0)),
        Booking::new("c1", "r1", "p3", at(monday(), 9, 0), at(monday(), 10, 0)),
        Booking::new("j2", "r9", "p1", at(wednesday, 14, 0), at(wednesday, 16, 0))
            .with_instructor("p2"),
    ]);

    // WHEN the user searches for John Smith
    let mut state = ViewState::new(wednesday);
    state.apply_filter(FilterCriterion::person("John Smith"));
    let grid = assemble(&state, &snap, noon(wednesday));

    // THEN only John's bookings show, on their weekday rows, tail first
    assert_eq!(grid.mode, ViewMode::Search);
    assert_eq!(grid.placement_count(), 2);
    assert_eq!(grid.rows[0].key, RowKey::Weekday(0));
    assert_eq!(grid.rows[0].placements[0].primary_label, "F-G000");
    assert_eq!(grid.rows[2].placements[0].primary_label, "F-G009");
    assert_eq!(grid.rows[2].placements[0].secondary_label, "Jane Doe");
}

#[test]
fn bdd_scenario_resource_search_shows_weekdays() {
    // GIVEN bookings on two aircraft
    let snap = club(vec![
        Booking::new("a", "r3", "p1", at(monday(), 9, 0), at(monday(), 10, 0)),
        Booking::new("b", "r5", "p3", at(monday(), 9, 0), at(monday(), 10, 0)),
    ]);

    // WHEN the user searches for F-G003
    let mut state = ViewState::new(monday());
    state.apply_filter(FilterCriterion::resource("F-G003"));
    let grid = assemble(&state, &snap, noon(monday()));

    // THEN rows are the seven weekdays and only F-G003's booking is shown
    assert_eq!(grid.rows.len(), 7);
    assert_eq!(grid.placement_count(), 1);
    assert_eq!(grid.rows[0].placements[0].primary_label, "John Smith");
}

// ── State machine scenarios ──────────────────────────────────────────

#[test]
fn bdd_scenario_search_round_trip_restores_page() {
    // GIVEN the user is browsing page 2 of the fleet
    let snap = club(Vec::new());
    let total = snap.resources.len();
    let mut state = ViewState::new(monday());
    assert!(state.apply(ScheduleEvent::PageChanged(2), total, monday()));
    let before = assemble(&state, &snap, noon(monday()));
    assert_eq!(before.rows.len(), 1);

    // WHEN they search, step a week forward, and clear the search
    state.apply(
        ScheduleEvent::FilterChanged(FilterCriterion::person("John Smith")),
        total,
        monday(),
    );
    assert_eq!(assemble(&state, &snap, noon(monday())).rows.len(), 7);
    state.apply(ScheduleEvent::Navigate(NavAction::Forward), total, monday());
    state.apply(ScheduleEvent::FilterCleared, total, monday());

    // THEN they are back on page 2, daily, stepping a day at a time
    let after = assemble(&state, &snap, noon(monday()));
    assert_eq!(after.mode, ViewMode::Browse);
    assert_eq!(after.page.map(|p| p.index), Some(2));
    assert_eq!(after.rows.len(), 1);
    assert_eq!(state.step_days(), 1);
    assert_eq!(state.reference_date, monday() + chrono::Duration::days(7));
}

#[test]
fn bdd_scenario_pagination_of_seventeen_aircraft() {
    // GIVEN 17 aircraft
    let snap = club(Vec::new());
    let total = snap.resources.len();
    let mut state = ViewState::new(monday());

    // WHEN paging through
    let sizes: Vec<usize> = (0..3)
        .map(|i| {
            state.set_page(i, total);
            assemble(&state, &snap, noon(monday())).rows.len()
        })
        .collect();

    // THEN pages hold 8, 8 and 1 rows, and page 3 does not exist
    assert_eq!(sizes, vec![8, 8, 1]);
    assert!(!state.set_page(3, total));
    assert!(!state.next_page(total));
    assert_eq!(state.page_index, 2);
}

// ── Now-marker scenarios ─────────────────────────────────────────────

#[test]
fn bdd_scenario_marker_only_today_within_hours() {
    let snap = club(Vec::new());
    let state = ViewState::new(monday());

    // Today, inside business hours → marker
    let m = assemble(&state, &snap, at(monday(), 10, 0)).marker.unwrap();
    assert_eq!(m.x_fraction, 0.25);

    // Today, before 06:00 → none
    assert!(assemble(&state, &snap, at(monday(), 5, 0)).marker.is_none());

    // Other day → none
    let tuesday = monday().succ_opt().unwrap();
    assert!(assemble(&state, &snap, at(tuesday, 10, 0)).marker.is_none());

    // Search mode → none
    let mut searching = state.clone();
    searching.apply_filter(FilterCriterion::resource("F-G000"));
    assert!(assemble(&searching, &snap, at(monday(), 10, 0)).marker.is_none());
}

#[test]
fn bdd_scenario_unresolved_ids_render_with_empty_labels() {
    // GIVEN a booking whose pilot and instructor are missing from the directory
    let snap = club(vec![Booking::new(
        "orphan",
        "r0",
        "ghost",
        at(monday(), 9, 0),
        at(monday(), 10, 0),
    )
    .with_instructor("ghost-2")]);

    // WHEN assembled
    let grid = assemble(&ViewState::new(monday()), &snap, noon(monday()));

    // THEN it still renders, with empty labels
    let p = &grid.rows[0].placements[0];
    assert_eq!(p.primary_label, "");
    assert_eq!(p.secondary_label, "");
    assert!(p.is_instructional);
}

#[test]
fn bdd_scenario_calendar_edges_render_without_crashing() {
    // GIVEN the demo-sized club and a reference date at either end of the calendar
    let snap = club(vec![Booking::new(
        "b1",
        "r0",
        "p1",
        at(monday(), 9, 0),
        at(monday(), 10, 0),
    )]);

    for edge in [NaiveDate::MIN, NaiveDate::MAX] {
        for criterion in [FilterCriterion::none(), FilterCriterion::person("John Smith")] {
            let mut state = ViewState::new(edge);
            state.apply_filter(criterion);

            // WHEN the grid is assembled
            let grid = assemble(&state, &snap, noon(monday()));

            // THEN it renders the nearest week with no placements
            let expected_rows = match state.mode() {
                ViewMode::Browse => 8,
                ViewMode::Search => 7,
            };
            assert_eq!(grid.rows.len(), expected_rows);
            assert_eq!(grid.placement_count(), 0);
        }
    }
}

#[test]
fn bdd_scenario_stepping_towards_the_calendar_end_stays_renderable() {
    // GIVEN a view on the day before the last date of the calendar
    let snap = club(Vec::new());
    let mut state = ViewState::new(NaiveDate::MAX.pred_opt().unwrap());

    // WHEN the user steps forward
    let moved = state.apply(
        ScheduleEvent::Navigate(NavAction::Forward),
        snap.resources.len(),
        monday(),
    );

    // THEN nothing moves and the grid still assembles
    assert!(!moved);
    let grid = assemble(&state, &snap, noon(monday()));
    assert_eq!(grid.rows.len(), 8);
}
