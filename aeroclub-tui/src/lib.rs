//! Aeroclub TUI — terminal booking schedule console.
//!
//! Provides:
//! - A daily fleet grid, eight aircraft per page, with a now-marker
//! - A weekly grid for one aircraft, pilot or instructor
//! - Live search suggestions and a booking details overlay
//! - Persisted page and first-run state between sessions

pub mod app;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;
