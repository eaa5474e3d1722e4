//! Demo club generator.
//!
//! Produces a deterministic snapshot for the week around an anchor date:
//! - 17 aircraft, so Browse mode has three pages (8 + 8 + 1)
//! - members, students and instructors, one instructor who also flies solo
//! - a mix of solo and instructional flights on every day of the week
//! - a handful of edge cases: a late flight running past 22:00, a dawn
//!   flight starting before 06:00, an overlapping pair on one aircraft and
//!   an overnight ferry flight

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::{Booking, Person, Resource, Role};
use crate::schedule::week_start;

use super::snapshot::Snapshot;

const FLEET: [(&str, &str); 17] = [
    ("F-GJDO", "DR400"),
    ("F-GKCX", "DR400"),
    ("F-HABC", "PA28"),
    ("F-GMPL", "C172"),
    ("F-GNTZ", "C152"),
    ("F-GORB", "C152"),
    ("F-HBXA", "DA40"),
    ("F-GTRY", "TB10"),
    ("F-GUAA", "DR400"),
    ("F-GVLE", "PA28"),
    ("F-HCAP", "CAP10"),
    ("F-GXKO", "C172"),
    ("F-HDYN", "DA20"),
    ("F-GBQM", "DR400"),
    ("F-GCSR", "Robin R2160"),
    ("F-GFAC", "C182"),
    ("F-HEPO", "SR20"),
];

const PEOPLE: [(&str, &str, Role); 12] = [
    ("Jane", "Doe", Role::Instructor),
    ("Marc", "Lefebvre", Role::Instructor),
    ("Sofia", "Rossi", Role::Instructor),
    ("John", "Smith", Role::Pilot),
    ("Camille", "Martin", Role::Pilot),
    ("Lucas", "Bernard", Role::Pilot),
    ("Emma", "Petit", Role::Student),
    ("Hugo", "Durand", Role::Student),
    ("Léa", "Moreau", Role::Student),
    ("Nathan", "Laurent", Role::Student),
    ("Chloé", "Garcia", Role::Pilot),
    ("Paul", "Roux", Role::Staff),
];

/// Deterministic demo snapshot for the Monday-anchored week containing
/// `anchor`.
pub fn demo_snapshot(anchor: NaiveDate) -> Snapshot {
    let resources: Vec<Resource> = FLEET
        .iter()
        .enumerate()
        .map(|(i, (tail, model))| Resource::new(format!("ac-{i:02}"), *tail).with_model(*model))
        .collect();
    let people: Vec<Person> = PEOPLE
        .iter()
        .enumerate()
        .map(|(i, (first, last, role))| Person::new(format!("pp-{i:02}"), *first, *last, *role))
        .collect();

    let instructors = ["pp-00", "pp-01", "pp-02"];
    let flyers = ["pp-03", "pp-04", "pp-05", "pp-06", "pp-07", "pp-08", "pp-09", "pp-10"];
    let monday = week_start(anchor);

    let mut bookings = Vec::new();
    let mut next_id = 1u64;
    let mut push = |bookings: &mut Vec<Booking>, b: Booking| {
        let mut b = b;
        b.id = next_id.into();
        next_id += 1;
        bookings.push(b);
    };

    for day_offset in 0..7i64 {
        let day = monday + Duration::days(day_offset);
        for (ac, resource) in resources.iter().enumerate() {
            // Roughly two thirds of the fleet flies on a given day.
            if (ac as i64 + day_offset) % 3 == 2 {
                continue;
            }
            let seed = ac * 7 + day_offset as usize * 3;
            let first_hour = 8 + (seed % 4) as u32;
            let flyer = flyers[seed % flyers.len()];
            let mut first = Booking::new(
                "",
                resource.id.as_str(),
                flyer,
                at(day, first_hour, 0),
                at(day, first_hour + 1 + (seed % 2) as u32, 30),
            );
            if seed % 2 == 0 {
                first = first.with_instructor(instructors[seed % instructors.len()]);
            }
            push(&mut bookings, first);

            if seed % 5 != 0 {
                let afternoon = 14 + (seed % 3) as u32;
                let flyer = flyers[(seed + 3) % flyers.len()];
                let mut second = Booking::new(
                    "",
                    resource.id.as_str(),
                    flyer,
                    at(day, afternoon, 0),
                    at(day, afternoon + 2, 0),
                );
                if seed % 3 == 0 {
                    second = second.with_secondary(flyers[(seed + 5) % flyers.len()]);
                }
                push(&mut bookings, second);
            }
        }
    }

    // Jane Doe flying solo, so an instructor search finds her in both roles.
    push(
        &mut bookings,
        Booking::new("", "ac-00", "pp-00", at(monday, 18, 0), at(monday, 19, 0))
            .with_description("Instructor proficiency flight"),
    );
    let wednesday = monday + Duration::days(2);
    push(
        &mut bookings,
        Booking::new("", "ac-02", "pp-05", at(wednesday, 21, 0), at(wednesday, 23, 0))
            .with_description("Night VFR"),
    );
    push(
        &mut bookings,
        Booking::new("", "ac-03", "pp-04", at(wednesday, 5, 0), at(wednesday, 7, 0))
            .with_description("Sunrise flight"),
    );
    push(
        &mut bookings,
        Booking::new("", "ac-04", "pp-03", at(wednesday, 12, 0), at(wednesday, 13, 30)),
    );
    push(
        &mut bookings,
        Booking::new("", "ac-04", "pp-06", at(wednesday, 13, 0), at(wednesday, 14, 0))
            .with_instructor("pp-01")
            .with_description("Overlaps the previous booking"),
    );
    let friday = monday + Duration::days(4);
    push(
        &mut bookings,
        Booking::new("", "ac-15", "pp-05", at(friday, 20, 0), at(friday, 20, 0) + Duration::hours(14))
            .with_description("Ferry flight, returns Saturday"),
    );

    Snapshot {
        resources,
        people,
        bookings,
    }
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
        + Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute))
}
