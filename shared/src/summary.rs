use std::collections::{HashMap, HashSet};
use std::fmt;
use uuid::Uuid;

use crate::models::Roster;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrinkOrder {
    /// Most requested first, ties alphabetical.
    #[default]
    ByCount,
    /// Order in which each drink first turns up walking the roster.
    FirstSeen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkCount {
    pub drink: String,
    pub count: usize,
}

/// What the caterers need to know about a selection of people.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub people: usize,
    pub vegetarians: usize,
    pub drinks: Vec<DrinkCount>,
}

impl Summary {
    pub fn drink_count(&self, drink: &str) -> usize {
        let drink = drink.to_lowercase();
        self.drinks.iter()
            .find(|d| d.drink == drink)
            .map_or(0, |d| d.count)
    }

    pub fn total_drinks(&self) -> usize {
        self.drinks.iter().map(|d| d.count).sum()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Food:")?;
        writeln!(f, "    {} people", self.people)?;
        writeln!(f, "    {} vegetarians", self.vegetarians)?;
        writeln!(f)?;
        writeln!(f, "Drinks:")?;
        for DrinkCount { drink, count } in &self.drinks {
            writeln!(f, "    {} {}", count, drink)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct DrinkTally {
    drink: String,
    count: usize,
    first_seen: usize,
}

/// Counts heads, vegetarians and drinks for the selected people.
///
/// Drinks are grouped case-insensitively and reported lowercased. Ids that
/// are not on the roster are skipped, and repeating an id does not count
/// that person twice.
pub fn summarize<I>(roster: &Roster, selected: I, order: DrinkOrder) -> Summary
where
    I: IntoIterator<Item = Uuid>,
{
    let selected: HashSet<Uuid> = selected.into_iter().collect();
    let mut summary = Summary::default();
    let mut tallies: HashMap<String, DrinkTally> = HashMap::new();

    for person in roster.people().iter().filter(|p| selected.contains(&p.id)) {
        summary.people += 1;
        if person.vegetarian {
            summary.vegetarians += 1;
        }

        let key = person.drink.to_lowercase();
        let first_seen = tallies.len();
        tallies.entry(key.clone())
            .or_insert_with(|| DrinkTally { drink: key, count: 0, first_seen })
            .count += 1;
    }

    let mut sorted: Vec<DrinkTally> = tallies.into_values().collect();
    match order {
        DrinkOrder::ByCount => sorted.sort_unstable_by(|a, b| {
            b.count.cmp(&a.count)
                .then_with(|| a.drink.cmp(&b.drink))
        }),
        DrinkOrder::FirstSeen => sorted.sort_unstable_by_key(|t| t.first_seen),
    }

    summary.drinks = sorted.into_iter()
        .map(|t| DrinkCount { drink: t.drink, count: t.count })
        .collect();
    summary
}
