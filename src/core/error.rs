//! Error Module
//!
//! Defines the error type shared by the data access layer, the prompt layer
//! and the interaction loop, plus the helpers that classify raw SQLite
//! failures into the categories the menu reports to the user.
use thiserror::Error;

/// Error type for the employee manager.
///
/// Startup failures (`Config`, `Connection`) are fatal. Everything raised
/// while a menu action runs is reported and the menu is shown again, with
/// the exception of `InputClosed`, which ends the session.
#[derive(Error, Debug)]
pub enum EmsError {
    /// The database could not be opened or prepared for use
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement preparation or execution failures
    #[error("Query error: {0}")]
    Query(String),

    /// Foreign key, NOT NULL and similar violations reported by the database
    #[error("Constraint error: {0}")]
    Constraint(String),

    /// User input rejected before reaching the database
    #[error("{0}")]
    Validation(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end of file while waiting for an answer
    #[error("Input closed")]
    InputClosed,
}

/// Type alias for Result to use EmsError as the error type.
pub type Result<T> = std::result::Result<T, EmsError>;

impl EmsError {
    /// Classifies a failure raised while executing a write statement.
    ///
    /// Constraint violations become `Constraint` so the user sees which
    /// reference was rejected; everything else becomes `Query` with the
    /// supplied context.
    pub fn from_write(context: &str, err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                let detail = message.clone().unwrap_or_else(|| code.to_string());
                EmsError::Constraint(format!("{}: {}", context, detail))
            }
            _ => EmsError::Query(format!("{}: {}", context, err)),
        }
    }

    /// Wraps a failure raised while reading rows.
    pub fn from_read(context: &str, err: rusqlite::Error) -> Self {
        EmsError::Query(format!("{}: {}", context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_error_display() {
        let conn_err = EmsError::Connection("unable to open".to_string());
        assert!(conn_err.to_string().contains("Connection error"));

        let query_err = EmsError::Query("Syntax error".to_string());
        assert!(query_err.to_string().contains("Query error"));

        let config_err = EmsError::Config("Invalid config".to_string());
        assert!(config_err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = EmsError::Validation("Salary must be a valid positive number.".to_string());
        assert_eq!(err.to_string(), "Salary must be a valid positive number.");
    }

    #[test]
    fn test_constraint_violation_is_classified() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            CREATE TABLE parent (id INTEGER PRIMARY KEY);
            CREATE TABLE child (id INTEGER PRIMARY KEY, parent_id INTEGER REFERENCES parent(id));
        ",
        )
        .unwrap();

        let err = conn
            .execute("INSERT INTO child (parent_id) VALUES (42)", [])
            .unwrap_err();
        match EmsError::from_write("Failed to insert child", err) {
            EmsError::Constraint(msg) => assert!(msg.contains("FOREIGN KEY")),
            other => panic!("Expected Constraint error, got {:?}", other),
        }
    }

    #[test]
    fn test_other_write_failures_are_query_errors() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute("INSERT INTO missing (x) VALUES (1)", []).unwrap_err();
        match EmsError::from_write("Failed to insert", err) {
            EmsError::Query(msg) => assert!(msg.contains("no such table")),
            other => panic!("Expected Query error, got {:?}", other),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: EmsError = io_err.into();
        match err {
            EmsError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }
    }
}
