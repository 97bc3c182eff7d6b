use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::{Error, ErrorCode, Result};
use crate::summary::{summarize, DrinkOrder, Summary};
use crate::validation::validate_new_person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub drink: String,
    pub vegetarian: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub drink: String,
    pub vegetarian: bool,
}

/// One row of the persisted roster: the person plus whether they are
/// currently an attendee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: Uuid,
    pub name: String,
    pub drink: String,
    pub vegetarian: bool,
    pub attendee: bool,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, drink: impl Into<String>, vegetarian: bool) -> Self {
        Self { name: name.into(), drink: drink.into(), vegetarian }
    }
}

impl Person {
    fn from_request(request: NewPerson) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            drink: request.drink.trim().to_string(),
            vegetarian: request.vegetarian,
        }
    }

    fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// People kept sorted by name, plus the set of those currently attending.
///
/// Every id in the attendee set refers to a person on the roster. Selection
/// is by id, so adding people never shifts who is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    people: Vec<Person>,
    attendees: HashSet<Uuid>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &[Person] { &self.people }

    pub fn len(&self) -> usize { self.people.len() }

    pub fn is_empty(&self) -> bool { self.people.is_empty() }

    pub fn get(&self, id: Uuid) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn is_attendee(&self, id: Uuid) -> bool {
        self.attendees.contains(&id)
    }

    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    /// Attendees in roster order.
    pub fn attendees(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| self.attendees.contains(&p.id))
    }

    pub fn attendee_ids(&self) -> Vec<Uuid> {
        self.attendees().map(|p| p.id).collect()
    }

    /// Case-insensitive exact name match. Names are not unique, so this can
    /// return several people.
    pub fn find_by_name(&self, name: &str) -> Vec<&Person> {
        let wanted = name.trim().to_lowercase();
        self.people.iter().filter(|p| p.name.to_lowercase() == wanted).collect()
    }

    pub fn add_person(&mut self, request: NewPerson) -> Result<Uuid> {
        validate_new_person(&request)?;
        let person = Person::from_request(request);
        let id = person.id;
        self.insert_sorted(person);
        Ok(id)
    }

    fn insert_sorted(&mut self, person: Person) {
        let key = person.sort_key();
        let at = self.people.partition_point(|p| p.sort_key() <= key);
        self.people.insert(at, person);
    }

    /// Replaces the selection. Fails without touching the roster if any id
    /// is unknown.
    pub fn set_attendees<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = Uuid>,
    {
        let selection: HashSet<Uuid> = ids.into_iter().collect();
        if let Some(&unknown) = selection.iter().find(|id| !self.contains(**id)) {
            return Err(Error::unknown_person(unknown));
        }
        self.attendees = selection;
        Ok(())
    }

    /// Flips one person's membership and returns whether they now attend.
    pub fn toggle_attendee(&mut self, id: Uuid) -> Result<bool> {
        if !self.contains(id) {
            return Err(Error::unknown_person(id));
        }
        if self.attendees.remove(&id) {
            Ok(false)
        } else {
            self.attendees.insert(id);
            Ok(true)
        }
    }

    /// Maps 0-based positions in the current ordering to ids.
    pub fn ids_at(&self, positions: &[usize]) -> Result<Vec<Uuid>> {
        positions.iter()
            .map(|&pos| self.people.get(pos)
                .map(|p| p.id)
                .ok_or_else(|| Error::position_out_of_range(pos, self.people.len())))
            .collect()
    }

    pub fn summary(&self, order: DrinkOrder) -> Summary {
        summarize(self, self.attendees.iter().copied(), order)
    }

    pub fn to_records(&self) -> Vec<PersonRecord> {
        self.people.iter()
            .map(|p| PersonRecord {
                id: p.id,
                name: p.name.clone(),
                drink: p.drink.clone(),
                vegetarian: p.vegetarian,
                attendee: self.attendees.contains(&p.id),
            })
            .collect()
    }

    /// Rebuilds a roster from persisted rows. Ids must be unique; names and
    /// drinks are taken as stored (trimmed) since input rules only apply to
    /// new people.
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self> {
        let mut roster = Self::new();
        for record in records {
            if roster.contains(record.id) {
                return Err(Error::with_details(
                    ErrorCode::Conflict,
                    "Duplicate person id in records",
                    record.id.to_string(),
                ));
            }
            roster.insert_record(PersonRecord {
                name: record.name.trim().to_string(),
                drink: record.drink.trim().to_string(),
                ..record
            });
        }
        Ok(roster)
    }

    pub(crate) fn insert_record(&mut self, record: PersonRecord) {
        if record.attendee {
            self.attendees.insert(record.id);
        }
        self.insert_sorted(Person {
            id: record.id,
            name: record.name,
            drink: record.drink,
            vegetarian: record.vegetarian,
        });
    }
}
