use crate::models::NewPerson;

pub const MAX_NAME_LENGTH: usize = 60;
pub const MAX_DRINK_LENGTH: usize = 40;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name exceeds maximum length of {MAX_NAME_LENGTH}")]
    NameTooLong,
    #[error("Drink cannot be empty")]
    EmptyDrink,
    #[error("Drink exceeds maximum length of {MAX_DRINK_LENGTH}")]
    DrinkTooLong,
    #[error("Invalid character in {0}")]
    ControlCharacter(&'static str),
}

/// Checks a request before it becomes a [`Person`](crate::models::Person).
///
/// Lengths are counted in characters after trimming. Duplicate names are
/// allowed; two people called "Dave" can both come to lunch.
pub fn validate_new_person(request: &NewPerson) -> Result<(), ValidationError> {
    let name = request.name.trim();
    let drink = request.drink.trim();

    if name.is_empty() { return Err(ValidationError::EmptyName); }
    if name.chars().count() > MAX_NAME_LENGTH { return Err(ValidationError::NameTooLong); }
    if name.chars().any(char::is_control) { return Err(ValidationError::ControlCharacter("name")); }

    if drink.is_empty() { return Err(ValidationError::EmptyDrink); }
    if drink.chars().count() > MAX_DRINK_LENGTH { return Err(ValidationError::DrinkTooLong); }
    if drink.chars().any(char::is_control) { return Err(ValidationError::ControlCharacter("drink")); }

    Ok(())
}
