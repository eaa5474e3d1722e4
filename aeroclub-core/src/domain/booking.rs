//! Booking — a reserved time interval on one aircraft.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::ids::{BookingId, PersonId, ResourceId};

/// A reservation as supplied by the booking-management backend.
///
/// The engine treats bookings as read-only input for one render pass.
/// `start < end` is expected but not enforced here: the placement step drops
/// bookings that violate it instead of failing the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub resource_id: ResourceId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub primary_person_id: PersonId,
    /// Passengers / co-pilots, at most two in practice.
    #[serde(default)]
    pub secondary_person_ids: Vec<PersonId>,
    #[serde(default)]
    pub instructor_id: Option<PersonId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Booking {
    pub fn new(
        id: impl Into<String>,
        resource_id: impl Into<String>,
        primary_person_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: BookingId::new(id),
            resource_id: ResourceId::new(resource_id),
            start,
            end,
            primary_person_id: PersonId::new(primary_person_id),
            secondary_person_ids: Vec::new(),
            instructor_id: None,
            description: None,
        }
    }

    pub fn with_instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = Some(PersonId::new(instructor_id));
        self
    }

    pub fn with_secondary(mut self, person_id: impl Into<String>) -> Self {
        self.secondary_person_ids.push(PersonId::new(person_id));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Calendar day the booking starts on. This is the only day a booking is
    /// laid out on, even if it runs past midnight.
    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    pub fn is_instructional(&self) -> bool {
        self.instructor_id.is_some()
    }
}
