//! Which two booking fields a placement shows, depending on what the user is
//! searching for.

use serde::{Deserialize, Serialize};

use crate::domain::{Booking, Directory};

use super::filter::FilterKind;

/// A field of a booking that can appear as placement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelField {
    PrimaryPerson,
    ResourceTail,
    Instructor,
}

impl LabelField {
    fn resolve(self, booking: &Booking, directory: &Directory<'_>) -> String {
        match self {
            LabelField::PrimaryPerson => directory.name(&booking.primary_person_id),
            LabelField::ResourceTail => directory.tail(&booking.resource_id).to_string(),
            LabelField::Instructor => directory.name_opt(booking.instructor_id.as_ref()),
        }
    }
}

/// Primary/secondary field ordering.
///
/// | kind       | primary        | secondary      |
/// |------------|----------------|----------------|
/// | None       | primary person | instructor     |
/// | Person     | resource tail  | instructor     |
/// | Resource   | primary person | instructor     |
/// | Instructor | resource tail  | primary person |
///
/// Searching by a person or instructor already names them in the header, so
/// the aircraft moves to the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPolicy {
    pub primary: LabelField,
    pub secondary: LabelField,
}

impl LabelPolicy {
    pub fn for_kind(kind: FilterKind) -> Self {
        let (primary, secondary) = match kind {
            FilterKind::None | FilterKind::Resource => {
                (LabelField::PrimaryPerson, LabelField::Instructor)
            }
            FilterKind::Person => (LabelField::ResourceTail, LabelField::Instructor),
            FilterKind::Instructor => (LabelField::ResourceTail, LabelField::PrimaryPerson),
        };
        Self { primary, secondary }
    }

    /// `(primary, secondary)` text for a booking. Unresolved ids give "".
    pub fn labels(&self, booking: &Booking, directory: &Directory<'_>) -> (String, String) {
        (
            self.primary.resolve(booking, directory),
            self.secondary.resolve(booking, directory),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Person, Resource, Role};
    use chrono::NaiveDate;

    fn fixture() -> (Vec<Resource>, Vec<Person>, Booking) {
        let resources = vec![Resource::new("r1", "F-GXYZ")];
        let people = vec![
            Person::new("p1", "John", "Smith", Role::Student),
            Person::new("p2", "Jane", "Doe", Role::Instructor),
        ];
        let d = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let booking = Booking::new(
            "b1",
            "r1",
            "p1",
            d.and_hms_opt(9, 0, 0).unwrap(),
            d.and_hms_opt(10, 0, 0).unwrap(),
        )
        .with_instructor("p2");
        (resources, people, booking)
    }

    #[test]
    fn label_table() {
        let (resources, people, booking) = fixture();
        let dir = Directory::new(&resources, &people);
        let cases = [
            (FilterKind::None, "John Smith", "Jane Doe"),
            (FilterKind::Person, "F-GXYZ", "Jane Doe"),
            (FilterKind::Resource, "John Smith", "Jane Doe"),
            (FilterKind::Instructor, "F-GXYZ", "John Smith"),
        ];
        for (kind, primary, secondary) in cases {
            let (p, s) = LabelPolicy::for_kind(kind).labels(&booking, &dir);
            assert_eq!((p.as_str(), s.as_str()), (primary, secondary), "{kind:?}");
        }
    }

    #[test]
    fn missing_instructor_gives_empty_secondary() {
        let (resources, people, mut booking) = fixture();
        booking.instructor_id = None;
        let dir = Directory::new(&resources, &people);
        let (_, s) = LabelPolicy::for_kind(FilterKind::None).labels(&booking, &dir);
        assert_eq!(s, "");
    }

    #[test]
    fn unknown_resource_gives_empty_tail() {
        let (resources, people, mut booking) = fixture();
        booking.resource_id = crate::domain::ResourceId::new("gone");
        let dir = Directory::new(&resources, &people);
        let (p, _) = LabelPolicy::for_kind(FilterKind::Person).labels(&booking, &dir);
        assert_eq!(p, "");
    }
}
