//! Free-text search over aircraft, people and instructors, and the filter
//! criterion that switches between the daily and weekly grids.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Booking, Directory, Person, Resource};

use super::window::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    None,
    Resource,
    Person,
    Instructor,
}

impl FilterKind {
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::None => "All",
            FilterKind::Resource => "Aircraft",
            FilterKind::Person => "Pilot",
            FilterKind::Instructor => "Instructor",
        }
    }

    /// The kind alone decides the view mode.
    pub fn mode(self) -> ViewMode {
        match self {
            FilterKind::None => ViewMode::Browse,
            FilterKind::Resource | FilterKind::Person | FilterKind::Instructor => {
                ViewMode::Search
            }
        }
    }
}

/// The active search selection. Exactly one criterion (or `None`) is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriterion {
    pub kind: FilterKind,
    pub label: String,
}

impl Default for FilterCriterion {
    fn default() -> Self {
        Self::none()
    }
}

impl FilterCriterion {
    /// Build a criterion. A blank label collapses to `None`, since it could
    /// only ever match unresolved ids.
    pub fn new(kind: FilterKind, label: impl Into<String>) -> Self {
        let label = label.into().trim().to_string();
        if kind == FilterKind::None || label.is_empty() {
            return Self::none();
        }
        Self { kind, label }
    }

    pub fn none() -> Self {
        Self {
            kind: FilterKind::None,
            label: String::new(),
        }
    }

    pub fn resource(tail: impl Into<String>) -> Self {
        Self::new(FilterKind::Resource, tail)
    }

    pub fn person(name: impl Into<String>) -> Self {
        Self::new(FilterKind::Person, name)
    }

    pub fn instructor(name: impl Into<String>) -> Self {
        Self::new(FilterKind::Instructor, name)
    }

    pub fn is_active(&self) -> bool {
        self.kind != FilterKind::None
    }

    pub fn mode(&self) -> ViewMode {
        self.kind.mode()
    }

    /// Whether a booking survives this criterion.
    ///
    /// An instructor criterion also matches bookings where the named person
    /// is the one flying, so someone who both instructs and flies shows up
    /// under either role.
    pub fn matches(&self, booking: &Booking, directory: &Directory<'_>) -> bool {
        let equals = |candidate: &str| !candidate.is_empty() && candidate == self.label;
        match self.kind {
            FilterKind::None => true,
            FilterKind::Resource => equals(directory.tail(&booking.resource_id)),
            FilterKind::Person => equals(&directory.name(&booking.primary_person_id)),
            FilterKind::Instructor => {
                equals(&directory.name_opt(booking.instructor_id.as_ref()))
                    || equals(&directory.name(&booking.primary_person_id))
            }
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FilterKind::None => write!(f, "no filter"),
            kind => write!(f, "{}: {}", kind.label(), self.label),
        }
    }
}

/// A labelled match offered to the user while typing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: FilterKind,
    pub label: String,
}

impl Suggestion {
    pub fn criterion(&self) -> FilterCriterion {
        FilterCriterion::new(self.kind, self.label.clone())
    }
}

/// Match `query` case-insensitively, by substring, against the three
/// searchable collections: aircraft by tail, people by full name, and
/// instructors by full name.
///
/// Results keep collection order (aircraft, people, instructors) and
/// duplicates are collapsed. A blank query yields nothing.
pub fn suggest(
    query: &str,
    resources: &[Resource],
    people: &[Person],
    limit: Option<usize>,
) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let tails = resources
        .iter()
        .map(|r| r.tail.clone())
        .filter(|t| hit(t.as_str()))
        .map(|label| Suggestion {
            kind: FilterKind::Resource,
            label,
        });
    let names = people
        .iter()
        .map(Person::full_name)
        .filter(|n| hit(n.as_str()))
        .map(|label| Suggestion {
            kind: FilterKind::Person,
            label,
        });
    let instructors = people
        .iter()
        .filter(|p| p.is_instructor())
        .map(Person::full_name)
        .filter(|n| hit(n.as_str()))
        .map(|label| Suggestion {
            kind: FilterKind::Instructor,
            label,
        });

    let mut seen = HashSet::new();
    let unique = tails
        .chain(names)
        .chain(instructors)
        .filter(|s| !s.label.is_empty())
        .filter(|s| seen.insert(s.clone()));
    match limit {
        Some(n) => unique.take(n).collect(),
        None => unique.collect(),
    }
}
