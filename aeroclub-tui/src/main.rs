//! Aeroclub console — booking schedule TUI with vim-style navigation.
//!
//! Usage: `aeroclub-tui [CONFIG.toml]`. The config path may also come from
//! `AEROCLUB_CONFIG`.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use aeroclub_core::ConsoleConfig;
use aeroclub_tui::app::AppState;
use aeroclub_tui::{input, logging, persistence, ui};

fn main() -> Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("AEROCLUB_CONFIG"))
        .map(PathBuf::from);
    let config = ConsoleConfig::load_or_default(config_path.as_deref())
        .context("load console config")?;

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(|| logging::default_path("console.log"));
    logging::init(&log_path, &config.log_filter)?;

    let state_path = config
        .state_file
        .clone()
        .unwrap_or_else(|| logging::default_path("state.json"));

    let today = Local::now().date_naive();
    let snapshot = config.load_snapshot(today).context("load schedule data")?;
    info!(
        aircraft = snapshot.resources.len(),
        people = snapshot.people.len(),
        bookings = snapshot.bookings.len(),
        "console starting"
    );

    let persisted = persistence::load(&state_path);
    let mut app = AppState::new(config, snapshot, today);
    persistence::apply(&mut app, persisted);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        warn!(error = %e, path = %state_path.display(), "could not save console state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render with the current local time; the marker moves on its own.
        let now = Local::now().naive_local();
        terminal.draw(|f| ui::draw(f, app, now))?;

        // 2. Poll for input events (250ms timeout keeps the marker fresh).
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key, Local::now().naive_local());
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
