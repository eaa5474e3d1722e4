//! Snapshot — one consistent export of aircraft, people and bookings, plus a
//! JSON-file source that serves it.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{Booking, BookingId, Directory, Person, Resource};

use super::source::{DataError, ScheduleSource};

/// Everything a render pass reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// A data problem found by [`Snapshot::check`]. None of these stop the grid
/// from rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotIssue {
    EndNotAfterStart(BookingId),
    UnknownResource(BookingId),
    UnknownPrimaryPerson(BookingId),
    UnknownSecondaryPerson(BookingId),
    UnknownInstructor(BookingId),
    TooManySecondaryPeople(BookingId, usize),
    DuplicateBookingId(BookingId),
}

impl fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotIssue::EndNotAfterStart(id) => {
                write!(f, "booking {id}: end is not after start (will not render)")
            }
            SnapshotIssue::UnknownResource(id) => write!(f, "booking {id}: unknown aircraft"),
            SnapshotIssue::UnknownPrimaryPerson(id) => write!(f, "booking {id}: unknown pilot"),
            SnapshotIssue::UnknownSecondaryPerson(id) => {
                write!(f, "booking {id}: unknown passenger")
            }
            SnapshotIssue::UnknownInstructor(id) => write!(f, "booking {id}: unknown instructor"),
            SnapshotIssue::TooManySecondaryPeople(id, n) => {
                write!(f, "booking {id}: {n} passengers (at most 2 expected)")
            }
            SnapshotIssue::DuplicateBookingId(id) => write!(f, "booking {id}: duplicate id"),
        }
    }
}

impl Snapshot {
    pub fn directory(&self) -> Directory<'_> {
        Directory::new(&self.resources, &self.people)
    }

    pub fn booking(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    /// Audit the snapshot for inconsistencies the engine silently tolerates.
    pub fn check(&self) -> Vec<SnapshotIssue> {
        let dir = self.directory();
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for b in &self.bookings {
            if !seen.insert(&b.id) {
                issues.push(SnapshotIssue::DuplicateBookingId(b.id.clone()));
            }
            if !b.is_well_formed() {
                issues.push(SnapshotIssue::EndNotAfterStart(b.id.clone()));
            }
            if dir.resource(&b.resource_id).is_none() {
                issues.push(SnapshotIssue::UnknownResource(b.id.clone()));
            }
            if dir.person(&b.primary_person_id).is_none() {
                issues.push(SnapshotIssue::UnknownPrimaryPerson(b.id.clone()));
            }
            if b.secondary_person_ids.iter().any(|p| dir.person(p).is_none()) {
                issues.push(SnapshotIssue::UnknownSecondaryPerson(b.id.clone()));
            }
            if b.secondary_person_ids.len() > 2 {
                issues.push(SnapshotIssue::TooManySecondaryPeople(
                    b.id.clone(),
                    b.secondary_person_ids.len(),
                ));
            }
            if let Some(i) = &b.instructor_id {
                if dir.person(i).is_none() {
                    issues.push(SnapshotIssue::UnknownInstructor(b.id.clone()));
                }
            }
        }
        issues
    }

    pub fn from_json(content: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write as pretty JSON, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), DataError> {
        let io_err = |source| DataError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        std::fs::write(path, self.to_json_pretty()?).map_err(io_err)
    }
}

/// JSON export on disk standing in for the hosted backend.
///
/// The whole file is re-read on every fetch, so edits show up on the next
/// refresh.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Snapshot, DataError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                DataError::NotFound(self.path.clone())
            } else {
                DataError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        let snapshot = Snapshot::from_json(&content)?;
        info!(
            path = %self.path.display(),
            resources = snapshot.resources.len(),
            people = snapshot.people.len(),
            bookings = snapshot.bookings.len(),
            "snapshot loaded"
        );
        let issues = snapshot.check();
        if !issues.is_empty() {
            warn!(path = %self.path.display(), count = issues.len(), "snapshot has data issues");
        }
        Ok(snapshot)
    }
}

impl ScheduleSource for SnapshotFile {
    fn fetch_resources(&self) -> Result<Vec<Resource>, DataError> {
        Ok(self.load()?.resources)
    }

    fn fetch_people(&self) -> Result<Vec<Person>, DataError> {
        Ok(self.load()?.people)
    }

    fn fetch_bookings(&self) -> Result<Vec<Booking>, DataError> {
        Ok(self.load()?.bookings)
    }

    fn fetch_all(&self) -> Result<Snapshot, DataError> {
        self.load()
    }
}

/// In-memory source, handy for tests and the demo fleet.
impl ScheduleSource for Snapshot {
    fn fetch_resources(&self) -> Result<Vec<Resource>, DataError> {
        Ok(self.resources.clone())
    }

    fn fetch_people(&self) -> Result<Vec<Person>, DataError> {
        Ok(self.people.clone())
    }

    fn fetch_bookings(&self) -> Result<Vec<Booking>, DataError> {
        Ok(self.bookings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use chrono::NaiveDate;

    fn sample() -> Snapshot {
        let d = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        Snapshot {
            resources: vec![Resource::new("r1", "F-GABC")],
            people: vec![Person::new("p1", "John", "Smith", Role::Pilot)],
            bookings: vec![
                Booking::new(
                    "b1",
                    "r1",
                    "p1",
                    d.and_hms_opt(9, 0, 0).unwrap(),
                    d.and_hms_opt(10, 0, 0).unwrap(),
                ),
                Booking::new(
                    "b2",
                    "r404",
                    "p1",
                    d.and_hms_opt(11, 0, 0).unwrap(),
                    d.and_hms_opt(10, 0, 0).unwrap(),
                )
                .with_instructor("p404"),
                Booking::new(
                    "b1",
                    "r1",
                    "p1",
                    d.and_hms_opt(12, 0, 0).unwrap(),
                    d.and_hms_opt(13, 0, 0).unwrap(),
                )
                .with_secondary("p1")
                .with_secondary("p1")
                .with_secondary("p2"),
            ],
        }
    }

    #[test]
    fn check_reports_every_issue() {
        let issues = sample().check();
        assert!(issues.contains(&SnapshotIssue::EndNotAfterStart(BookingId::new("b2"))));
        assert!(issues.contains(&SnapshotIssue::UnknownResource(BookingId::new("b2"))));
        assert!(issues.contains(&SnapshotIssue::UnknownInstructor(BookingId::new("b2"))));
        assert!(issues.contains(&SnapshotIssue::DuplicateBookingId(BookingId::new("b1"))));
        assert!(issues.contains(&SnapshotIssue::UnknownSecondaryPerson(BookingId::new("b1"))));
        assert!(issues.contains(&SnapshotIssue::TooManySecondaryPeople(BookingId::new("b1"), 3)));
        assert_eq!(issues.len(), 6);
    }

    #[test]
    fn file_source_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("club.json");
        let snap = sample();
        snap.save(&path).unwrap();

        let source = SnapshotFile::new(&path);
        let loaded = source.fetch_all().unwrap();
        assert_eq!(loaded, snap);
        assert_eq!(source.fetch_resources().unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = SnapshotFile::new("/nonexistent/club.json");
        assert!(matches!(source.fetch_all(), Err(DataError::NotFound(_))));
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("club.json");
        std::fs::write(&path, "not valid json {{{").unwrap();
        let source = SnapshotFile::new(&path);
        assert!(matches!(source.fetch_all(), Err(DataError::Parse(_))));
    }

    #[test]
    fn booking_lookup() {
        let snap = sample();
        assert!(snap.booking(&BookingId::new("b2")).is_some());
        assert!(snap.booking(&BookingId::new("zzz")).is_none());
    }
}
