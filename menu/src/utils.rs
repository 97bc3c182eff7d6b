use crate::error::{StoreError, StoreResult};
use shared::Roster;
use uuid::Uuid;

pub fn parse_person_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

/// Turns a command-line selector into a person id.
///
/// A selector is a 1-based position as printed by `list`, a person's UUID,
/// or a name (case-insensitive). Digits are read as a position first; when
/// that position is off the end of the roster they are tried as a name.
pub fn resolve_selector(roster: &Roster, selector: &str) -> StoreResult<Uuid> {
    let selector = selector.trim();

    let out_of_range = match selector.parse::<usize>() {
        Ok(position) => match roster.ids_at(&[position.saturating_sub(1)]) {
            Ok(ids) if position > 0 => return ids
                .first()
                .copied()
                .ok_or_else(|| StoreError::UnknownSelector(selector.to_string())),
            Ok(_) => None,
            Err(e) => Some(e),
        },
        Err(_) => None,
    };

    if let Some(id) = parse_person_id(selector) {
        if roster.contains(id) {
            return Ok(id);
        }
        return Err(shared::Error::unknown_person(id).into());
    }

    match roster.find_by_name(selector).as_slice() {
        [person] => Ok(person.id),
        [] => Err(match out_of_range {
            Some(e) => e.into(),
            None => StoreError::UnknownSelector(selector.to_string()),
        }),
        _ => Err(StoreError::AmbiguousSelector(selector.to_string())),
    }
}

pub fn resolve_selectors<S: AsRef<str>>(roster: &Roster, selectors: &[S]) -> StoreResult<Vec<Uuid>> {
    selectors.iter()
        .map(|s| resolve_selector(roster, s.as_ref()))
        .collect()
}

/// One line per person: position, `*` for attendees, name, drink and `(v)`
/// for vegetarians.
pub fn format_roster(roster: &Roster) -> String {
    roster.people().iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{:>3} {} {} - {}{}\n",
                i + 1,
                if roster.is_attendee(p.id) { '*' } else { ' ' },
                p.name,
                p.drink,
                if p.vegetarian { " (v)" } else { "" },
            )
        })
        .collect()
}
