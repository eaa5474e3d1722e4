//! Keyboard input dispatch — overlays first, then global schedule keys.

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use aeroclub_core::schedule::{NavAction, ViewMode};

use crate::app::{AppState, Overlay};

/// Handle a key event at wall-clock `now`.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: NaiveDateTime) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }
    let today = now.date();

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome | Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Booking(_) => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Search => {
            handle_search_overlay(app, key, now);
            return;
        }
        Overlay::None => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // 2. Schedule keys.
    let grid = app.grid(now);
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('h') | KeyCode::Left => app.navigate(NavAction::Back, today),
        KeyCode::Char('l') | KeyCode::Right => app.navigate(NavAction::Forward, today),
        KeyCode::Char('t') => app.navigate(NavAction::Today, today),
        KeyCode::Char('w') => app.navigate(NavAction::ThisWeek, today),
        KeyCode::Char('[') => app.step_page(-1, today),
        KeyCode::Char(']') => app.step_page(1, today),
        KeyCode::Char('j') | KeyCode::Down => app.move_row(1, grid.rows.len()),
        KeyCode::Char('k') | KeyCode::Up => app.move_row(-1, grid.rows.len()),
        KeyCode::Tab => app.cycle_placement(&grid),
        KeyCode::Enter => app.activate_selected(&grid),
        KeyCode::Char('r') => app.reload(today),
        KeyCode::Esc => {
            if app.mode() == ViewMode::Search {
                app.clear_filter(today);
            }
        }
        _ => {}
    }

    let grid = app.grid(now);
    app.sync_cursor(&grid);
}

fn handle_search_overlay(app: &mut AppState, key: KeyEvent, now: NaiveDateTime) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.search.input.clear();
            app.search.suggestions.clear();
        }
        KeyCode::Enter => {
            app.accept_suggestion(now.date());
            let grid = app.grid(now);
            app.sync_cursor(&grid);
        }
        KeyCode::Down | KeyCode::Tab => app.move_suggestion(1),
        KeyCode::Up | KeyCode::BackTab => app.move_suggestion(-1),
        KeyCode::Backspace => {
            app.search.input.pop();
            app.refresh_suggestions();
        }
        KeyCode::Char(c) => {
            app.search.input.push(c);
            app.refresh_suggestions();
        }
        _ => {}
    }
}
