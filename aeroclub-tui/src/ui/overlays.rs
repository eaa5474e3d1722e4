//! Overlay widgets — welcome, help, search with live suggestions, booking
//! details.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use aeroclub_core::domain::{Booking, BookingId, Directory};
use aeroclub_core::Snapshot;

use crate::app::SearchState;
use crate::theme;
use crate::ui::centered_rect;

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(title)
        .title_style(theme::accent_bold())
}

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. h / l move one day back or forward",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. [ and ] page through the fleet",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. / searches an aircraft, pilot or instructor",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Tab picks a booking, Enter shows its details",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::text())),
    ];

    let para = Paragraph::new(text)
        .block(popup_block(" Aeroclub schedule "))
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, "Dates");
    key(&mut lines, "h / ←", "Back one day (one week while filtered)");
    key(&mut lines, "l / →", "Forward one day (one week while filtered)");
    key(&mut lines, "t", "Today");
    key(&mut lines, "w", "Monday of this week");
    lines.push(Line::from(""));

    section(&mut lines, "Grid");
    key(&mut lines, "[ / ]", "Previous / next page of aircraft");
    key(&mut lines, "j / k", "Move row cursor");
    key(&mut lines, "Tab", "Pick the next booking in the row");
    key(&mut lines, "Enter", "Show booking details");
    lines.push(Line::from(""));

    section(&mut lines, "Search");
    key(&mut lines, "/", "Search aircraft, people and instructors");
    key(&mut lines, "Esc", "Clear the filter and return to the daily view");
    lines.push(Line::from(""));

    section(&mut lines, "Other");
    key(&mut lines, "r", "Reload the data file");
    key(&mut lines, "?", "This help");
    key(&mut lines, "q", "Quit");

    let para = Paragraph::new(lines).block(popup_block(" Help [any key] "));
    f.render_widget(para, popup);
}

fn section(lines: &mut Vec<Line>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:<10}"), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

pub fn render_search(f: &mut Frame, area: Rect, search: &SearchState) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = popup_block(" Search [Enter]apply [Esc]cancel ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let prompt = Line::from(vec![
        Span::styled("> ", theme::accent_bold()),
        Span::styled(search.input.as_str(), theme::text()),
        Span::styled("_", theme::accent()),
    ]);
    f.render_widget(Paragraph::new(prompt), chunks[0]);

    if search.suggestions.is_empty() {
        let hint = if search.input.trim().is_empty() {
            "Type a tail number or a name"
        } else {
            "No matches"
        };
        f.render_widget(
            Paragraph::new(Span::styled(hint, theme::muted())),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = search
        .suggestions
        .iter()
        .map(|s| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<11}", s.kind.label()), theme::muted()),
                Span::styled(s.label.clone(), theme::text()),
            ]))
        })
        .collect();
    let list = List::new(items).highlight_style(theme::accent_bold().add_modifier(
        ratatui::style::Modifier::REVERSED,
    ));
    let mut state = ListState::default().with_selected(Some(search.cursor));
    f.render_stateful_widget(list, chunks[1], &mut state);
}

/// Lines shown for one booking. Unresolved ids show as blanks.
pub fn booking_lines(booking: &Booking, directory: &Directory<'_>) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Aircraft".to_string(), directory.tail(&booking.resource_id).to_string()),
        ("Pilot".to_string(), directory.name(&booking.primary_person_id)),
    ];
    if booking.instructor_id.is_some() {
        rows.push((
            "Instructor".to_string(),
            directory.name_opt(booking.instructor_id.as_ref()),
        ));
    }
    for id in &booking.secondary_person_ids {
        rows.push(("Passenger".to_string(), directory.name(id)));
    }
    let minutes = (booking.end - booking.start).num_minutes();
    rows.push((
        "From".to_string(),
        booking.start.format("%a %-d %b %Y %H:%M").to_string(),
    ));
    rows.push((
        "To".to_string(),
        booking.end.format("%a %-d %b %Y %H:%M").to_string(),
    ));
    rows.push((
        "Duration".to_string(),
        format!("{}h{:02}", minutes / 60, minutes % 60),
    ));
    rows.push((
        "Type".to_string(),
        if booking.is_instructional() {
            "Instruction".to_string()
        } else {
            "Solo".to_string()
        },
    ));
    if let Some(desc) = &booking.description {
        rows.push(("Notes".to_string(), desc.clone()));
    }
    rows
}

pub fn render_booking(f: &mut Frame, area: Rect, snapshot: &Snapshot, id: &BookingId) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = popup_block(" Booking [Esc]close ");
    let lines: Vec<Line> = match snapshot.booking(id) {
        Some(booking) => booking_lines(booking, &snapshot.directory())
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<12}"), theme::muted()),
                    Span::styled(value, theme::text()),
                ])
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            format!("Booking {id} is no longer in the schedule."),
            theme::warning(),
        ))],
    };

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeroclub_core::domain::{Person, Resource, Role};
    use chrono::NaiveDate;

    fn fixture() -> (Vec<Resource>, Vec<Person>, Booking) {
        let day = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let resources = vec![Resource::new("r1", "F-GABC")];
        let people = vec![
            Person::new("p1", "John", "Smith", Role::Pilot),
            Person::new("p2", "Jane", "Doe", Role::Instructor),
        ];
        let booking = Booking::new(
            "b1",
            "r1",
            "p1",
            day.and_hms_opt(9, 0, 0).unwrap(),
            day.and_hms_opt(11, 30, 0).unwrap(),
        )
        .with_instructor("p2")
        .with_secondary("ghost")
        .with_description("Circuits");
        (resources, people, booking)
    }

    #[test]
    fn details_list_every_party() {
        let (resources, people, booking) = fixture();
        let dir = Directory::new(&resources, &people);
        let rows = booking_lines(&booking, &dir);
        let get = |label: &str| {
            rows.iter()
                .find(|(l, _)| l == label)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("Aircraft"), Some("F-GABC"));
        assert_eq!(get("Pilot"), Some("John Smith"));
        assert_eq!(get("Instructor"), Some("Jane Doe"));
        assert_eq!(get("Passenger"), Some(""));
        assert_eq!(get("Duration"), Some("2h30"));
        assert_eq!(get("Type"), Some("Instruction"));
        assert_eq!(get("Notes"), Some("Circuits"));
    }

    #[test]
    fn solo_booking_has_no_instructor_line() {
        let (resources, people, mut booking) = fixture();
        booking.instructor_id = None;
        let dir = Directory::new(&resources, &people);
        let rows = booking_lines(&booking, &dir);
        assert!(rows.iter().all(|(l, _)| l != "Instructor"));
        assert!(rows.iter().any(|(l, v)| l == "Type" && v == "Solo"));
    }
}
