//! Aeroclub Core — booking schedule layout engine for the club operations
//! console.
//!
//! This crate contains:
//! - Domain types (aircraft, people, bookings) and id → label lookups
//! - The layout engine: time windows, pagination, filter resolution, label
//!   policy, placement geometry, the now-marker and grid assembly
//! - The Browse/Search view state machine
//! - The data-source boundary with a JSON snapshot source and a demo club
//! - TOML console configuration

pub mod config;
pub mod data;
pub mod domain;
pub mod schedule;

pub use config::{ConfigError, ConsoleConfig};
pub use data::{DataError, ScheduleSource, Snapshot};
pub use schedule::{assemble, GridModel, ViewState};
