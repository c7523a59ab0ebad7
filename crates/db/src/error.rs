use core::fmt::{self, Display};
use tokio_postgres::error::SqlState;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A required text field was empty.
    BadInput,
    /// The targeted record does not exist.
    NotFound,
    /// Some other integrity constraint rejected the write.
    Constraint,
    /// The connection to the database has been lost.
    Unavailable,
    /// Unrecoverable error.
    Fatal,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BadInput => "unacceptable input",
            Self::NotFound => "record not found",
            Self::Constraint => "constraint violation",
            Self::Unavailable => "database unavailable",
            Self::Fatal => "unexpected database error",
        })
    }
}

impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if err.is_closed() {
            return Self::Unavailable;
        }

        let Some(err) = err.as_db_error() else {
            return Self::Fatal;
        };

        match (err.code(), err.column(), err.constraint()) {
            (&SqlState::NOT_NULL_VIOLATION, Some("question" | "answer"), _) => Self::BadInput,
            (&SqlState::CHECK_VIOLATION, _, Some("questions_question_check" | "questions_answer_check")) => {
                Self::BadInput
            }
            (
                &SqlState::CHECK_VIOLATION
                | &SqlState::NOT_NULL_VIOLATION
                | &SqlState::UNIQUE_VIOLATION
                | &SqlState::FOREIGN_KEY_VIOLATION,
                _,
                _,
            ) => Self::Constraint,
            (&SqlState::ADMIN_SHUTDOWN | &SqlState::CANNOT_CONNECT_NOW | &SqlState::TOO_MANY_CONNECTIONS, _, _) => {
                Self::Unavailable
            }
            _ => Self::Fatal,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
