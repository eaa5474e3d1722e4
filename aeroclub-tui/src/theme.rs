//! Flight-line theme tokens for the schedule console.
//!
//! # Color Palette
//! - **Background**: Deep navy (base layer)
//! - **Accent**: Sky cyan (focus, headers)
//! - **Instructional**: Amber (dual flights with an instructor)
//! - **Solo**: Runway green (solo / non-instructional flights)
//! - **Marker**: Signal red (current time)
//! - **Warning**: Orange (status warnings)
//! - **Muted**: Slate (hints, empty grid, secondary text)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub instructional: Color,
    pub solo: Color,
    pub marker: Color,
    pub warning: Color,
    pub negative: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_dark: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::flight_line()
    }
}

impl Theme {
    pub fn flight_line() -> Self {
        Self {
            background: Color::Rgb(14, 20, 33),
            accent: Color::Rgb(80, 200, 255),
            instructional: Color::Rgb(255, 176, 32),
            solo: Color::Rgb(64, 200, 120),
            marker: Color::Rgb(255, 70, 70),
            warning: Color::Rgb(255, 140, 0),
            negative: Color::Rgb(255, 20, 90),
            muted: Color::Rgb(112, 128, 150),
            text_primary: Color::White,
            text_dark: Color::Rgb(10, 10, 10),
        }
    }

    /// Fill color for a booking bar.
    pub fn booking_color(&self, is_instructional: bool) -> Color {
        if is_instructional {
            self.instructional
        } else {
            self.solo
        }
    }
}

fn theme() -> Theme {
    Theme::default()
}

pub fn accent() -> Style {
    Style::default().fg(theme().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(theme().muted)
}

pub fn warning() -> Style {
    Style::default().fg(theme().warning)
}

pub fn negative() -> Style {
    Style::default().fg(theme().negative)
}

pub fn text() -> Style {
    Style::default().fg(theme().text_primary)
}

pub fn marker() -> Style {
    Style::default().fg(theme().marker).add_modifier(Modifier::BOLD)
}

/// Booking bar: dark text on the class color; selection inverts it.
pub fn booking(is_instructional: bool, selected: bool) -> Style {
    let t = theme();
    let style = Style::default()
        .fg(t.text_dark)
        .bg(t.booking_color(is_instructional));
    if selected {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    }
}

pub fn row_label(is_cursor: bool) -> Style {
    if is_cursor {
        accent().add_modifier(Modifier::REVERSED)
    } else {
        text()
    }
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_color_by_class() {
        let t = Theme::default();
        assert_eq!(t.booking_color(true), t.instructional);
        assert_eq!(t.booking_color(false), t.solo);
        assert_ne!(t.instructional, t.solo);
    }

    #[test]
    fn selected_booking_is_reversed() {
        let s = booking(true, true);
        assert!(s.add_modifier.contains(Modifier::REVERSED));
        assert!(!booking(true, false).add_modifier.contains(Modifier::REVERSED));
    }
}
