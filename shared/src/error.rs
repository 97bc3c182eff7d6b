use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::validation::ValidationError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ErrorCode {
    #[error("Person not found")]
    NotFound,
    #[error("Roster conflict")]
    Conflict,
    #[error("Validation failed")]
    ValidationFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn unknown_person(id: Uuid) -> Self {
        Self::with_details(ErrorCode::NotFound, "No such person on the roster", id.to_string())
    }

    pub fn position_out_of_range(position: usize, len: usize) -> Self {
        Self::with_details(
            ErrorCode::NotFound,
            format!("Position {} is out of range", position),
            format!("roster has {} people", len),
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
