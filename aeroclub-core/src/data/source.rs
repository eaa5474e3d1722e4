//! The data-access boundary: where aircraft, people and bookings come from.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Booking, Person, Resource};

use super::snapshot::Snapshot;

/// Structured error types for data operations.
///
/// These are designed to be displayable in both CLI and TUI contexts.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("snapshot file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Bulk, eager loader for one page visit. No incremental contract: each call
/// returns the full collection.
pub trait ScheduleSource {
    fn fetch_resources(&self) -> Result<Vec<Resource>, DataError>;

    fn fetch_people(&self) -> Result<Vec<Person>, DataError>;

    fn fetch_bookings(&self) -> Result<Vec<Booking>, DataError>;

    /// Fetch all three collections into one snapshot.
    fn fetch_all(&self) -> Result<Snapshot, DataError> {
        Ok(Snapshot {
            resources: self.fetch_resources()?,
            people: self.fetch_people()?,
            bookings: self.fetch_bookings()?,
        })
    }
}
