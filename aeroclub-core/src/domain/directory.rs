//! Id → display lookups over the pre-joined resource and person arrays.

use std::collections::HashMap;

use super::ids::{PersonId, ResourceId};
use super::person::Person;
use super::resource::Resource;

/// Borrowed index over one render pass's resources and people.
///
/// Lookups never fail: an id that does not resolve yields an empty label.
#[derive(Debug, Clone, Default)]
pub struct Directory<'a> {
    resources: HashMap<&'a ResourceId, &'a Resource>,
    people: HashMap<&'a PersonId, &'a Person>,
}

impl<'a> Directory<'a> {
    pub fn new(resources: &'a [Resource], people: &'a [Person]) -> Self {
        Self {
            resources: resources.iter().map(|r| (&r.id, r)).collect(),
            people: people.iter().map(|p| (&p.id, p)).collect(),
        }
    }

    pub fn resource(&self, id: &ResourceId) -> Option<&'a Resource> {
        self.resources.get(id).copied()
    }

    pub fn person(&self, id: &PersonId) -> Option<&'a Person> {
        self.people.get(id).copied()
    }

    /// Tail number for a resource id, or "" if unknown.
    pub fn tail(&self, id: &ResourceId) -> &'a str {
        self.resource(id).map(|r| r.tail.as_str()).unwrap_or("")
    }

    /// Full name for a person id, or "" if unknown.
    pub fn name(&self, id: &PersonId) -> String {
        self.person(id).map(Person::full_name).unwrap_or_default()
    }

    /// Like [`Directory::name`] but for an optional id (instructor slot).
    pub fn name_opt(&self, id: Option<&PersonId>) -> String {
        id.map(|id| self.name(id)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn unresolved_ids_yield_empty_labels() {
        let resources = vec![Resource::new("r1", "F-GABC")];
        let people = vec![Person::new("p1", "Ada", "Lovelace", Role::Pilot)];
        let dir = Directory::new(&resources, &people);

        assert_eq!(dir.tail(&ResourceId::new("r1")), "F-GABC");
        assert_eq!(dir.tail(&ResourceId::new("nope")), "");
        assert_eq!(dir.name(&PersonId::new("p1")), "Ada Lovelace");
        assert_eq!(dir.name(&PersonId::new("nope")), "");
        assert_eq!(dir.name_opt(None), "");
    }
}
