//! Person — pilot, student, instructor or staff identity.

use serde::{Deserialize, Serialize};

use super::ids::PersonId;

/// Club role of a person. Only `Instructor` changes engine behaviour: it puts
/// the person in the instructor search collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Pilot,
    Student,
    Instructor,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: PersonId::new(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
        }
    }

    /// "first last", trimmed so a missing half does not leave a stray space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn is_instructor(&self) -> bool {
        self.role == Role::Instructor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_and_trims() {
        let p = Person::new("p1", " Jane ", "Doe", Role::Instructor);
        assert_eq!(p.full_name(), "Jane Doe");
        let q = Person::new("p2", "Cher", "", Role::Pilot);
        assert_eq!(q.full_name(), "Cher");
    }

    #[test]
    fn person_json_uses_camel_case() {
        let json = r#"{"id":"p1","firstName":"Jane","lastName":"Doe","role":"instructor"}"#;
        let p: Person = serde_json::from_str(json).unwrap();
        assert!(p.is_instructor());
        assert_eq!(p.last_name, "Doe");
    }
}
