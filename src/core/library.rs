use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // The book is checked out by someone else; rented_by names the current renter
    // so that callers can report who holds it.
    AlreadyRented {
        message: String,
        rented_by: String,
    },
    NotRented {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn already_rented(rented_by: &str) -> LibraryError {
        LibraryError::AlreadyRented {
            message: format!("Book is already rented by {}", rented_by),
            rented_by: rented_by.to_string(),
        }
    }

    pub fn not_rented() -> LibraryError {
        LibraryError::NotRented { message: "Book is not currently rented".to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotFound { message } => { message }
            LibraryError::Validation { message, .. } => { message }
            LibraryError::AlreadyRented { message, .. } => { message }
            LibraryError::NotRented { message } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::AlreadyRented { message, rented_by } => {
                write!(f, "{} ({})", message, rented_by)
            }
            LibraryError::NotRented { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BookStatus {
    Available,
    Rented,
}

impl From<bool> for BookStatus {
    fn from(available: bool) -> Self {
        if available {
            BookStatus::Available
        } else {
            BookStatus::Rented
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Rented => write!(f, "Rented"),
        }
    }
}
