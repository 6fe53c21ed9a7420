use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
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

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => { message }
            CommandError::Validation { message, .. } => { message }
            CommandError::AlreadyRented { message, .. } => { message }
            CommandError::NotRented { message } => { message }
            CommandError::Serialization { message } => { message }
            CommandError::Runtime { message, .. } => { message }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::AlreadyRented { message, rented_by } => {
                CommandError::AlreadyRented { message, rented_by }
            }
            LibraryError::NotRented { message } => {
                CommandError::NotRented { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
