//! Aeroclub CLI — schedule grids, search suggestions and snapshot tools.
//!
//! Commands:
//! - `grid` — print the daily fleet grid or a filtered weekly grid
//! - `suggest` — list search suggestions for a query
//! - `check` — audit a snapshot file for inconsistent references
//! - `sample` — write the demo club as a snapshot file

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use aeroclub_core::data::{demo_snapshot, SnapshotFile};
use aeroclub_core::schedule::{
    cell_index, page_count, suggest, FilterCriterion, BAND_HOURS, VISIBLE_END_HOUR,
    VISIBLE_START_HOUR,
};
use aeroclub_core::{assemble, ConsoleConfig, GridModel, ScheduleSource, Snapshot, ViewState};

#[derive(Parser)]
#[command(
    name = "aeroclub",
    about = "Aeroclub CLI — booking schedule grids and snapshot tools"
)]
struct Cli {
    /// Console config TOML. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the schedule grid for a date.
    Grid {
        /// Snapshot JSON. Falls back to the config, then to the demo club.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Show the week of one aircraft, by tail number.
        #[arg(long, group = "filter")]
        resource: Option<String>,

        /// Show the week of one pilot, by full name.
        #[arg(long, group = "filter")]
        person: Option<String>,

        /// Show the week of one instructor, by full name.
        #[arg(long, group = "filter")]
        instructor: Option<String>,

        /// Page of aircraft in the daily grid, starting at 1.
        #[arg(long)]
        page: Option<usize>,

        /// Print the render model as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List search suggestions for a query.
    Suggest {
        /// Snapshot JSON. Falls back to the config, then to the demo club.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Text to match against tails and names.
        query: String,
    },
    /// Audit a snapshot file for unknown ids and malformed bookings.
    Check {
        /// Snapshot JSON to audit.
        #[arg(long)]
        data: PathBuf,
    },
    /// Write the demo club as a snapshot file.
    Sample {
        /// Output path.
        #[arg(long)]
        out: PathBuf,

        /// Any date in the week to generate (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ConsoleConfig::load_or_default(cli.config.as_deref())?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Grid {
            data,
            date,
            resource,
            person,
            instructor,
            page,
            json,
        } => {
            let criterion = match (resource, person, instructor) {
                (Some(tail), _, _) => FilterCriterion::resource(tail),
                (_, Some(name), _) => FilterCriterion::person(name),
                (_, _, Some(name)) => FilterCriterion::instructor(name),
                _ => FilterCriterion::none(),
            };
            let date = parse_date(date.as_deref())?.unwrap_or(today);
            let snapshot = load_snapshot(&config, data.as_deref(), date)?;
            run_grid(&snapshot, date, criterion, page, json)
        }
        Commands::Suggest { data, query } => {
            let snapshot = load_snapshot(&config, data.as_deref(), today)?;
            run_suggest(&snapshot, &query, config.suggestion_limit)
        }
        Commands::Check { data } => run_check(&data),
        Commands::Sample { out, date } => {
            let anchor = parse_date(date.as_deref())?.unwrap_or(today);
            run_sample(&out, anchor)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: Option<&str>) -> Result<Option<NaiveDate>> {
    s.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date '{s}'"))
    })
    .transpose()
}

/// `--data` wins over the config's data file; with neither, the demo club
/// anchored on `anchor` is used.
fn load_snapshot(config: &ConsoleConfig, data: Option<&Path>, anchor: NaiveDate) -> Result<Snapshot> {
    let snapshot = match data {
        Some(path) => SnapshotFile::new(path).fetch_all()?,
        None => config.load_snapshot(anchor)?,
    };
    debug!(
        aircraft = snapshot.resources.len(),
        bookings = snapshot.bookings.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

fn run_grid(
    snapshot: &Snapshot,
    date: NaiveDate,
    criterion: FilterCriterion,
    page: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut state = ViewState::new(date);
    state.apply_filter(criterion);

    if let Some(page) = page {
        if state.criterion.is_active() {
            bail!("--page only applies to the daily grid (no filter)");
        }
        let count = page_count(snapshot.resources.len());
        if page == 0 || page > count {
            bail!("page {page} out of range (1..={count})");
        }
        state.set_page(page - 1, snapshot.resources.len());
    }

    let now = chrono::Local::now().naive_local();
    let grid = assemble(&state, snapshot, now);
    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        print!("{}", render_text(&grid, snapshot, TRACK_WIDTH));
    }
    Ok(())
}

const TRACK_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 12;

/// Plain-text grid: one bar line per row, then the bookings of that row.
/// `#` marks instructional flights, `=` solo ones and `|` the current time.
fn render_text(grid: &GridModel, snapshot: &Snapshot, track: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", grid.title());
    let _ = write!(out, "Mode: {}", grid.mode.label());
    if let Some(page) = grid.page {
        let _ = write!(out, "  Page: {}/{}", page.index + 1, page.count);
    }
    let _ = writeln!(out, "  Filter: {}", grid.criterion);
    let _ = writeln!(out, "{:LABEL_WIDTH$}{}", "", axis(track));

    for row in &grid.rows {
        let mut bar = vec!['.'; track];
        for p in &row.placements {
            let (start, end) = p.geometry().cell_span(track);
            let fill = if p.is_instructional { '#' } else { '=' };
            bar[start..end].iter_mut().for_each(|c| *c = fill);
        }
        if let Some(marker) = grid.marker {
            bar[cell_index(marker.x_fraction, track)] = '|';
        }
        let label: String = row.label.chars().take(LABEL_WIDTH - 1).collect();
        let _ = writeln!(
            out,
            "{label:<LABEL_WIDTH$}{}",
            bar.into_iter().collect::<String>()
        );
        for p in &row.placements {
            let times = snapshot
                .booking(&p.booking_id)
                .map(|b| format!("{}-{}", b.start.format("%H:%M"), b.end.format("%H:%M")))
                .unwrap_or_default();
            let with = if p.secondary_label.is_empty() {
                String::new()
            } else {
                format!(" / {}", p.secondary_label)
            };
            let _ = writeln!(
                out,
                "{:LABEL_WIDTH$}  {times} {}{with}",
                "", p.primary_label
            );
        }
    }
    if grid.placement_count() == 0 {
        let _ = writeln!(out, "No bookings in this window.");
    }
    out
}

fn axis(track: usize) -> String {
    let mut axis = vec![' '; track];
    for hour in (VISIBLE_START_HOUR..=VISIBLE_END_HOUR).step_by(4) {
        let fraction = f64::from(hour - VISIBLE_START_HOUR) / BAND_HOURS;
        let col = cell_index(fraction, track).min(track.saturating_sub(2));
        for (i, ch) in format!("{hour:02}").chars().enumerate() {
            if let Some(slot) = axis.get_mut(col + i) {
                *slot = ch;
            }
        }
    }
    axis.into_iter().collect()
}

fn run_suggest(snapshot: &Snapshot, query: &str, limit: usize) -> Result<()> {
    let suggestions = suggest(query, &snapshot.resources, &snapshot.people, Some(limit));
    if suggestions.is_empty() {
        println!("No matches for '{query}'");
        return Ok(());
    }
    for s in suggestions {
        println!("{:<11} {}", s.kind.label(), s.label);
    }
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    let snapshot = SnapshotFile::new(path).fetch_all()?;
    let issues = snapshot.check();
    println!(
        "{}: {} aircraft, {} people, {} bookings",
        path.display(),
        snapshot.resources.len(),
        snapshot.people.len(),
        snapshot.bookings.len()
    );
    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }
    for issue in &issues {
        println!("  - {issue}");
    }
    bail!("{} issue(s) found", issues.len());
}

fn run_sample(out: &Path, anchor: NaiveDate) -> Result<()> {
    let snapshot = demo_snapshot(anchor);
    snapshot
        .save(out)
        .with_context(|| format!("write sample to {}", out.display()))?;
    println!(
        "Wrote {} aircraft, {} people, {} bookings to {}",
        snapshot.resources.len(),
        snapshot.people.len(),
        snapshot.bookings.len(),
        out.display()
    );
    Ok(())
}
