//! Result and error types for the core library
//!
//! Rejected field values are not errors; the prompt loops recover from them.
//! Only conditions that end a session show up here.

use thiserror::Error;

use super::Field;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input ended while waiting for {field}")]
    EndOfInput { field: Field },

    #[error("Too many invalid attempts for {field} ({attempts})")]
    AttemptsExhausted { field: Field, attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The field being collected when the session stopped, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Error::EndOfInput { field } | Error::AttemptsExhausted { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
