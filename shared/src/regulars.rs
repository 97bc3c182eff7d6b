use uuid::Uuid;

use crate::models::{PersonRecord, Roster};

/// (name, drink, vegetarian, regular)
pub const STANDARD_PEOPLE: &[(&str, &str, bool, bool)] = &[
    ("Simon", "pomegranite juice", false, true),
    ("Alban", "orange juice", false, true),
    ("Sjoerd", "orange juice", false, true),
    ("David", "orange juice", false, true),
    ("Will", "orange juice", true, true),
    ("Mateu", "orange juice", false, false),
    ("Arun", "orange juice", false, false),
    ("Marco", "Coke", false, true),
    ("Rob", "Coke", false, true),
    ("Cosimo", "Coke", false, true),
    ("Jonny", "Coke", false, true),
    ("Philip", "Coke", false, true),
    ("Philippe", "Coke", false, false),
    ("Martin", "Coke", false, false),
    ("Monty", "Coke", false, false),
    ("Gordon", "Coke", false, false),
    ("Elliot", "Coke", false, false),
    ("Daniel", "Coke", true, true),
    ("Kyle", "Coke", false, false),
    ("Megan", "Diet Coke", true, false),
    ("Christian", "sparkling water", false, true),
    ("Vivek", "water", false, false),
    ("Helen", "water", false, false),
];

/// The roster a fresh install starts with, regulars already selected.
pub fn standard_roster() -> Roster {
    let mut roster = Roster::new();
    for &(name, drink, vegetarian, regular) in STANDARD_PEOPLE {
        roster.insert_record(PersonRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            drink: drink.to_string(),
            vegetarian,
            attendee: regular,
        });
    }
    roster
}
